use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    HttpMessage,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};

pub use crate::trace_ctx::RequestTraceId;
use crate::trace_ctx;

pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Outermost middleware: gives each request a [`RequestTraceId`], stores it
/// in the extensions, scopes the downstream pipeline to it and echoes it as
/// `x-trace-id`. Error responses set the same header themselves.
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let id = RequestTraceId::generate();
        req.extensions_mut().insert(id.clone());

        // Handlers, extractors and error rendering run while this future is
        // polled, so they all see the same id.
        let header_value = HeaderValue::from_str(id.as_str()).ok();
        let fut = trace_ctx::scope(id.clone(), self.service.call(req));

        Box::pin(async move {
            let mut res = fut.await?;
            if let Some(value) = header_value {
                res.headers_mut()
                    .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
            }
            Ok(res)
        })
    }
}
