use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserRes};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let body = body.into_inner();
    let user_id = db
        .create_user(DBUserCreate {
            name: body.name,
            email: body.email,
        })
        .await?;

    let user = db.get_user_by_id(user_id).await?;

    Ok(ApiResponse::Created(user.into()))
}
