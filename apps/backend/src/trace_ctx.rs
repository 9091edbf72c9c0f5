//! Request trace id, carried in request extensions and in a task-local for
//! code that has no access to the `HttpRequest` (error rendering, extractors).

use std::fmt;
use std::future::Future;

use actix_web::dev::ServiceRequest;
use actix_web::HttpMessage;
use tokio::task_local;
use uuid::Uuid;

/// Placeholder reported when no request is in scope.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

/// Trace id assigned to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTraceId(pub String);

impl RequestTraceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Id stored on the request by `RequestTrace`, if it ran.
    pub fn of(req: &ServiceRequest) -> Option<Self> {
        req.extensions().get::<Self>().cloned()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestTraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

task_local! {
    static CURRENT: RequestTraceId;
}

/// Trace id of the request being served on this task.
pub fn current() -> Option<RequestTraceId> {
    CURRENT.try_with(Clone::clone).ok()
}

/// Like [`current`], falling back to [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    current().map_or_else(|| UNKNOWN_TRACE_ID.to_string(), |id| id.0)
}

/// Run `future` with `id` as the current trace id.
pub async fn scope<F>(id: RequestTraceId, future: F) -> F::Output
where
    F: Future,
{
    CURRENT.scope(id, future).await
}
