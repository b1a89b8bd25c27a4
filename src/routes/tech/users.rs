use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{tech_id}/users")]
async fn users(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<UserRes>> {
    let users = db.list_tech_users(path.into_inner()).await?;
    Ok(ApiResponse::Ok(users.into_iter().map(UserRes::from).collect()))
}
