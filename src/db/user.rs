use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{DbErr, EntityTrait, QueryOrder, Set};
use tracing::debug;

impl DatabaseService {
    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn create_user(&self, payload: user::DBUserCreate) -> Result<i32, AppError> {
        let name = payload.name.trim().to_string();
        let email = payload.email.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        if email.is_empty() {
            return Err(AppError::Validation("email must not be empty".into()));
        }

        // users.email is a unique key; a duplicate surfaces as AlreadyExists
        let now = Utc::now();
        let res = User::insert(UserActive {
            name: Set(name),
            email: Set(email),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&self.database_connection)
        .await?;

        debug!("created user {}", res.last_insert_id);
        Ok(res.last_insert_id)
    }
}
