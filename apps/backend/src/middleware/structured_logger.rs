use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::trace_ctx::{RequestTraceId, UNKNOWN_TRACE_ID};

/// Request line captured before the request is handed downstream.
struct RequestLine {
    method: String,
    path: String,
    trace_id: String,
    started: Instant,
}

impl RequestLine {
    fn capture(req: &ServiceRequest) -> Self {
        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            trace_id: RequestTraceId::of(req)
                .map_or_else(|| UNKNOWN_TRACE_ID.to_string(), |id| id.0),
            started: Instant::now(),
        }
    }

    /// 5xx at error, 4xx at warn (domain rejections land here), the rest at info.
    fn completed(&self, status: StatusCode) {
        let duration_us = self.started.elapsed().as_micros() as u64;
        let status_code = status.as_u16();
        let (method, path, trace_id) = (&self.method, &self.path, &self.trace_id);
        if status.is_server_error() {
            error!(
                http.method = %method,
                url.path = %path,
                http.status_code = status_code,
                duration_us,
                trace_id = %trace_id,
                "request_completed"
            );
        } else if status.is_client_error() {
            warn!(
                http.method = %method,
                url.path = %path,
                http.status_code = status_code,
                duration_us,
                trace_id = %trace_id,
                "request_completed"
            );
        } else {
            info!(
                http.method = %method,
                url.path = %path,
                http.status_code = status_code,
                duration_us,
                trace_id = %trace_id,
                "request_completed"
            );
        }
    }
}

/// One `request_completed` event per request.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let line = RequestLine::capture(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            line.completed(status);
            result
        })
    }
}
