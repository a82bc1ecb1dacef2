use thiserror::Error;
use tonic::Status;

/// Errors surfaced by the action cache request path.
///
/// Each variant maps onto a single gRPC status code; the message is expected to
/// name the digest involved.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    /// The backing store broke its own contract (e.g. an incomplete batch answer).
    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    FailedPrecondition(String),

    #[error("{0}")]
    ResourceExhausted(String),

    #[error("{0}")]
    PermissionDenied(String),
}

impl CacheError {
    pub fn is_internal(&self) -> bool {
        matches!(self, CacheError::Internal(_))
    }
}

impl From<CacheError> for Status {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::InvalidArgument(msg) => Status::invalid_argument(msg),
            CacheError::NotFound(msg) => Status::not_found(msg),
            CacheError::Internal(msg) => Status::internal(msg),
            CacheError::FailedPrecondition(msg) => Status::failed_precondition(msg),
            CacheError::ResourceExhausted(msg) => Status::resource_exhausted(msg),
            CacheError::PermissionDenied(msg) => Status::permission_denied(msg),
        }
    }
}
