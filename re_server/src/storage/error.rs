use thiserror::Error;

/// Backend conditions callers need to tell apart. Carried inside
/// `anyhow::Error` and recovered with `downcast_ref`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage capacity exceeded: {requested} bytes requested, {available} bytes available")]
    CapacityExceeded { requested: u64, available: u64 },
}
