use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::tech::TechRes;
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
async fn list(
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Vec<TechRes>> {
    let techs = db.list_techs().await?;
    Ok(ApiResponse::Ok(techs.into_iter().map(TechRes::from).collect()))
}
