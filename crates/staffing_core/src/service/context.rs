//! Request-scoped metadata passed explicitly into every service call.

use uuid::Uuid;

/// Per-request metadata carried from the transport into the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    correlation_id: Uuid,
}

impl RequestContext {
    /// Creates a context with a freshly generated correlation id.
    pub fn new() -> Self {
        Self::with_correlation_id(Uuid::new_v4())
    }

    /// Adopts a correlation id supplied by the caller (e.g. a request header).
    pub fn with_correlation_id(correlation_id: Uuid) -> Self {
        Self { correlation_id }
    }

    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
