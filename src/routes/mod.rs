// Route exports
pub mod recommendations;

use actix_web::web;

use crate::error::handle_json_payload_error;

pub use recommendations::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommendations::configure),
    );
}

/// JSON extractor config rendering payload errors as `ErrorResponse`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

