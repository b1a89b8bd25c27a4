use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::tech::{RTechName, TechRes};
use actix_web::{post, web};
use std::sync::Arc;

#[post("/{user_id}/techs")]
async fn store(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    data: web::Json<RTechName>,
) -> ApiResult<TechRes> {
    let tech = db.add_user_tech(path.into_inner(), &data.name).await?;
    Ok(ApiResponse::Ok(tech.into()))
}
