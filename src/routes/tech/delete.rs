use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::tech::RTechName;
use actix_web::{delete, web};
use std::sync::Arc;

#[delete("/{user_id}/techs")]
async fn delete(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    data: web::Json<RTechName>,
) -> ApiResult<()> {
    db.remove_user_tech(path.into_inner(), &data.name).await?;
    Ok(ApiResponse::NoContent)
}
