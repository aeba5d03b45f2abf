use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use campus_rank::config::{LoggingSettings, Settings};
use campus_rank::core::ScoringEngine;
use campus_rank::routes::{self, AppState};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    match &settings {
        Ok(s) => init_logging(&s.logging.level, &s.logging.format),
        Err(_) => {
            let fallback = LoggingSettings::default();
            init_logging(&fallback.level, &fallback.format)
        }
    }

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Starting Campus Rank recommendation service...");

    let engine_settings = settings.scoring.engine_settings();

    if let Err(errors) = engine_settings.weights.validate() {
        for e in &errors {
            error!("Invalid scoring configuration: {}", e);
        }
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            errors.join("; "),
        ));
    }

    let engine = ScoringEngine::new(engine_settings);

    info!(
        "Scoring engine initialized with weights: {:?}, history window: {} days, trending limit: {}",
        engine_settings.weights,
        settings.scoring.history_window_days,
        engine_settings.trending_limit
    );

    let app_state = AppState::new(engine, settings.recommendations);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
