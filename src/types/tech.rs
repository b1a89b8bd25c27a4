use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of both `POST` and `DELETE /users/{user_id}/techs`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RTechName {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TechRes {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::tech::Model> for TechRes {
    fn from(t: entity::tech::Model) -> Self {
        TechRes {
            id: t.id,
            name: t.name,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
