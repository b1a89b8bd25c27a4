use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::tech::TechRes;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{user_id}/techs")]
async fn index(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<TechRes>> {
    let techs = db.list_user_techs(path.into_inner()).await?;
    Ok(ApiResponse::Ok(techs.into_iter().map(TechRes::from).collect()))
}
