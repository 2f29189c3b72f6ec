use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use housing_advisor::config::{LoggingSettings, Settings};
use housing_advisor::core::Advisor;
use housing_advisor::routes::{self, AppState};
use housing_advisor::services::SessionStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging; `RUST_LOG` overrides the configured level
fn init_logging(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration comes first so logging can honour it
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Housing Advisor service...");

    let limit = settings.advisor.recommendation_limit;
    if limit == 0 {
        error!("advisor.recommendation_limit must be at least 1");
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "advisor.recommendation_limit must be at least 1",
        ));
    }

    let advisor = Advisor::new(limit);
    let sessions = SessionStore::new(
        advisor,
        settings.sessions.max_sessions,
        settings.sessions.idle_ttl_secs,
    );

    info!(
        "Session store initialized (max: {} sessions, idle TTL: {}s, top picks: {})",
        settings.sessions.max_sessions, settings.sessions.idle_ttl_secs, limit
    );

    let app_state = AppState { sessions };

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
