//! Access token entity for SeaORM.
//!
//! Rows are keyed for lookup by `token_hash`; the plaintext never reaches
//! the database.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "access_tokens")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub token_hash: String,
    pub created_at: DateTimeWithTimeZone,
    pub last_used_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for keystone_core::domain::AccessToken {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            token_hash: model.token_hash,
            created_at: model.created_at.into(),
            last_used_at: model.last_used_at.map(Into::into),
        }
    }
}

impl From<keystone_core::domain::AccessToken> for ActiveModel {
    fn from(token: keystone_core::domain::AccessToken) -> Self {
        Self {
            id: Set(token.id),
            user_id: Set(token.user_id),
            token_hash: Set(token.token_hash),
            created_at: Set(token.created_at.into()),
            last_used_at: Set(token.last_used_at.map(Into::into)),
        }
    }
}
