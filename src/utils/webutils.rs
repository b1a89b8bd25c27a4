use actix_web::dev::ServiceRequest;
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::warn;

use crate::config::config;
use crate::types::error::AppError;

pub fn admin_key_matches(token: &str) -> bool {
    matches!(config(), Some(cfg) if !cfg.admin_key.is_empty() && token == cfg.admin_key)
}

pub async fn validate_admin_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    if admin_key_matches(credentials.token()) {
        Ok(req)
    } else {
        warn!("rejected bearer token on {}", req.path());
        Err((AppError::Unauthorized.into(), req))
    }
}
