pub mod database_service;
pub mod tech;
pub mod user;
