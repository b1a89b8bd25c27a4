use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "techs")] // not the pluralised "teches"
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
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

// Tech many_to_many Users through user_techs.tech_id
impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_tech::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_tech::Relation::Tech.def().rev())
    }
}

impl Model {
    /// Users associated with this tech.
    pub fn users(&self) -> Select<super::user::Entity> {
        self.find_related(super::user::Entity)
    }
}

impl ActiveModelBehavior for ActiveModel {}
