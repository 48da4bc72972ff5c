use actix_cors::Cors;
use actix_web::web;

pub mod health;
pub mod notes;

/// CORS policy for `/api/*`: any origin, any method, any header
fn api_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Request bodies are never size-limited
fn api_payload_config() -> web::PayloadConfig {
    web::PayloadConfig::new(usize::MAX)
}

/// Register every route. `/` sits outside the CORS scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::config_routes(cfg);
    cfg.service(
        web::scope("/api")
            .app_data(api_payload_config())
            .wrap(api_cors())
            .configure(health::config_api_routes)
            .configure(notes::config),
    );
}
