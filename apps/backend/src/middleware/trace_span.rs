//! Opens the `request` span every handler log line inherits.
//!
//! Must sit inside `RequestTrace` so the trace id is already assigned:
//!
//! App::new()
//!     .wrap(StructuredLogger)
//!     .wrap(TraceSpan)
//!     .wrap(RequestTrace)   // outermost
//!     // routes...

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use tracing::{field, info_span, Instrument};

use crate::trace_ctx::{RequestTraceId, UNKNOWN_TRACE_ID};

const WS_GAME_PREFIX: &str = "/ws/games/";

#[derive(Deserialize)]
struct GameIdQuery {
    #[serde(rename = "gameId")]
    game_id: Option<String>,
}

/// Game a request targets, when it names one in the URL. Body-addressed
/// routes (bid, play) log their game id from the service layer instead.
fn game_id_in_url(req: &ServiceRequest) -> Option<String> {
    if let Some(id) = req.path().strip_prefix(WS_GAME_PREFIX) {
        return (!id.is_empty()).then(|| id.to_string());
    }
    web::Query::<GameIdQuery>::from_query(req.query_string())
        .ok()
        .and_then(|q| q.into_inner().game_id)
        .filter(|id| !id.is_empty())
}

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = RequestTraceId::of(&req)
            .map_or_else(|| UNKNOWN_TRACE_ID.to_string(), |id| id.0);

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path(),
            game_id = field::Empty,
        );
        if let Some(game_id) = game_id_in_url(&req) {
            span.record("game_id", game_id.as_str());
        }

        Box::pin(self.service.call(req).instrument(span))
    }
}
