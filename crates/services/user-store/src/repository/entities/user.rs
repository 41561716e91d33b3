//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::{NotSet, Set};

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(nullable)]
    pub full_name: Option<String>,
    /// Stored lower-cased; uniqueness is enforced by the table as well
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(nullable)]
    pub location: Option<String>,
    #[sea_orm(nullable)]
    pub website: Option<String>,
    #[sea_orm(indexed)]
    pub is_active: bool,
    #[sea_orm(column_type = "String(StringLen::N(2048))")]
    pub avatar: String,
    pub avatar_email: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub last_login: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Columns an update never writes
pub fn is_immutable(col: &Column) -> bool {
    matches!(col, Column::Id | Column::CreatedAt)
}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            location: model.location,
            website: model.website,
            is_active: model.is_active,
            avatar: model.avatar,
            avatar_email: model.avatar_email,
            created_at: model.created_at,
            updated_at: model.updated_at,
            last_login: model.last_login,
        }
    }
}

impl From<&User> for Model {
    fn from(user: &User) -> Self {
        Model {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            location: user.location.clone(),
            website: user.website.clone(),
            is_active: user.is_active,
            avatar: user.avatar.clone(),
            avatar_email: user.avatar_email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            last_login: user.last_login,
        }
    }
}

impl ActiveModel {
    /// Insert model for a new user; the id is left to the database
    pub fn for_insert(user: &User) -> Self {
        ActiveModel {
            id: NotSet,
            full_name: Set(user.full_name.clone()),
            email: Set(user.email.clone()),
            location: Set(user.location.clone()),
            website: Set(user.website.clone()),
            is_active: Set(user.is_active),
            avatar: Set(user.avatar.clone()),
            avatar_email: Set(user.avatar_email.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
            last_login: Set(user.last_login),
        }
    }

    /// Update model writing only the given columns plus `updated_at`.
    pub fn for_update(user: &User, columns: &[Column]) -> Self {
        let model = Model::from(user);
        let mut active = ActiveModel::new();
        for col in columns.iter().filter(|c| !is_immutable(c)) {
            active.set(*col, model.get(*col));
        }
        active.set(Column::UpdatedAt, model.get(Column::UpdatedAt));
        active
    }
}
