use sea_orm::ConnectOptions;
use std::sync::Arc;
use techstack::config::{EnvConfig, CONFIG};
use techstack::db::database_service::DatabaseService;

pub mod client;

pub const TEST_ADMIN_KEY: &str = "test_admin_key";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let _ = CONFIG.set(get_test_config());

        // one connection: every connection to sqlite::memory: is its own database
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            DatabaseService::with_options(options)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext { db }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(),
        admin_key: TEST_ADMIN_KEY.to_string(),
    }
}

#[allow(dead_code)]
pub fn admin_header() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", TEST_ADMIN_KEY))
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use techstack::types::tech::RTechName;
    use techstack::types::user::RUserCreate;

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            name: "Test User".to_string(),
            email: email.to_string(),
        }
    }

    pub fn tech(name: &str) -> RTechName {
        RTechName { name: name.to_string() }
    }
}
