//! Boundary instrumentation for service calls.
//!
//! Handlers run each [`PostCommentService`](quill_core::PostCommentService)
//! call through [`traced`] rather than logging inside the domain.

use std::future::Future;

use quill_core::DomainError;
use tracing::Instrument;

/// Run a service call inside an `info` span named after the operation.
///
/// Logs start and end at debug, domain rejections (not found, forbidden,
/// validation) at warn, and infrastructure failures at error. The result is
/// passed through untouched.
pub async fn traced<T, F>(operation: &'static str, user_id: &str, call: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    let span = tracing::info_span!("service_call", operation, user_id = %user_id);

    async move {
        tracing::debug!("[START] {}", operation);
        let result = call.await;
        match &result {
            Ok(_) => tracing::debug!("[END] {}", operation),
            Err(DomainError::Repository(e)) => {
                tracing::error!(error = %e, "[ERROR] {}", operation)
            }
            Err(e) => tracing::warn!(error = %e, "[REJECTED] {}", operation),
        }
        result
    }
    .instrument(span)
    .await
}
