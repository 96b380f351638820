//! Observability module - tracing around service calls.

mod service_span;

pub use service_span::traced;
