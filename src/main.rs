use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use techstack::config::{EnvConfig, CONFIG};
use techstack::db::database_service::DatabaseService;
use techstack::routes::configure_routes;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match EnvConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .map_err(std::io::Error::other)?
    );

    let _ = CONFIG.set(config);

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
