use crate::utils::webutils::validate_admin_token;
use actix_web::web;

pub mod health;
pub mod tech;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let admin_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_admin_token);

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/users")
            .service(user::list::list)
            .service(user::create::create)
            .service(tech::index::index)
            .service(tech::store::store)
            .service(tech::delete::delete)
            .wrap(admin_auth.clone())
    );
    cfg.service(
        web::scope("/techs")
            .service(tech::list::list)
            .service(tech::users::users)
            .wrap(admin_auth)
    );
}
