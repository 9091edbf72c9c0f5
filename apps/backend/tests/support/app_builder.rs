use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use std::time::Duration;

use actix_web::{test, web, App, Error};
use river_backend::config::EngineConfig;
use river_backend::middleware::request_trace::RequestTrace;
use river_backend::middleware::structured_logger::StructuredLogger;
use river_backend::middleware::trace_span::TraceSpan;
use river_backend::routes;
use river_backend::state::app_state::AppState;

/// App state with no trick reveal delay and a fixed deal seed.
pub fn test_state() -> AppState {
    AppState::new(&EngineConfig {
        trick_reveal_delay: Duration::ZERO,
        deal_seed: Some(7),
    })
}

/// Build the production route table with the request middleware, without CORS.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
