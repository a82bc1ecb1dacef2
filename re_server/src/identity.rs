use std::fmt;
use uuid::Uuid;

/// Identifier stamped into `ExecutedActionMetadata.worker` on every
/// `UpdateActionResult`. Built once when the server starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerIdentity {
    id: String,
}

impl WorkerIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// A six byte node id, hex encoded.
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4();
        Self::new(hex::encode(&uuid.as_bytes()[..6]))
    }

    pub fn from_config(worker_id: Option<&str>) -> Self {
        match worker_id {
            Some(id) if !id.trim().is_empty() => Self::new(id.trim()),
            _ => Self::generate(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for WorkerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_identity_is_node_sized() {
        let identity = WorkerIdentity::generate();
        assert_eq!(identity.as_str().len(), 12);
        assert!(identity.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_configured_identity_wins() {
        assert_eq!(WorkerIdentity::from_config(Some("node-7")).as_str(), "node-7");
        assert_eq!(WorkerIdentity::from_config(Some("  ")).as_str().len(), 12);
        assert_eq!(WorkerIdentity::from_config(None).as_str().len(), 12);
    }
}
