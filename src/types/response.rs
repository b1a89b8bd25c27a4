use actix_web::{body::BoxBody, HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::types::error::AppError;

/// Successful handler outcome; failures go through `AppError`.
pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    Created(T),
    NoContent,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse {
        match self {
            Self::Ok(body) => HttpResponse::Ok().json(body),
            Self::Created(body) => HttpResponse::Created().json(body),
            Self::EmptyOk => HttpResponse::Ok().finish(),
            Self::NoContent => HttpResponse::NoContent().finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
