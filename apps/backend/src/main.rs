use actix_web::{web, App, HttpServer};
use river_backend::config::{EngineConfig, ServerConfig};
use river_backend::middleware::cors::cors_middleware;
use river_backend::middleware::request_trace::RequestTrace;
use river_backend::middleware::structured_logger::StructuredLogger;
use river_backend::middleware::trace_span::TraceSpan;
use river_backend::routes;
use river_backend::state::app_state::AppState;
use river_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the process environment only.
    let server = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };
    let engine = match EngineConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "Invalid engine configuration");
            std::process::exit(1);
        }
    };

    info!(
        host = %server.host,
        port = server.port,
        trick_reveal_delay_ms = engine.trick_reveal_delay.as_millis() as u64,
        deterministic_deal = engine.deal_seed.is_some(),
        "Starting River backend"
    );

    let data = web::Data::new(AppState::new(&engine));
    let origins = server.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(server.bind_addr())?
    .run()
    .await
}
