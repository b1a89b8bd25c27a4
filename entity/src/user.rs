use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_tech::Entity")]
    UserTech,
}

impl Related<super::user_tech::Entity> for Entity {
    fn to() -> RelationDef { Relation::UserTech.def() }
}

impl Related<super::tech::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_tech::Relation::Tech.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_tech::Relation::User.def().rev())
    }
}

impl Model {
    /// Techs associated with this user.
    pub fn techs(&self) -> Select<super::tech::Entity> {
        self.find_related(super::tech::Entity)
    }
}

impl ActiveModelBehavior for ActiveModel {}
