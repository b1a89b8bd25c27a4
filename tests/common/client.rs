use actix_web::{web, App};
use std::sync::Arc;
use techstack::{
    db::database_service::DatabaseService,
    types::{error::AppError, user::DBUserCreate},
};

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(techstack::routes::configure_routes)
    }

    pub async fn create_test_user(&self, email: Option<String>) -> Result<i32, AppError> {
        let email = email.unwrap_or_else(|| "user@test.com".to_string());

        self.db.create_user(DBUserCreate {
            name: "Test User".to_string(),
            email,
        }).await
    }

    pub async fn create_named_user(&self, name: &str) -> i32 {
        self.db.create_user(DBUserCreate {
            name: name.to_string(),
            email: format!("{}@test.com", name.to_lowercase()),
        })
        .await
        .expect("Failed to create user")
    }
}
