use super::error::StorageError;
use super::traits::{scoped_key, DigestCache, DynDigestCache};
use crate::auth::RequestContext;
use anyhow::Result;
use async_trait::async_trait;
use re_grpc_proto::build::bazel::remote::execution::v2::Digest;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct MemoryState {
    entries: HashMap<String, Vec<u8>>,
    size_bytes: u64,
}

/// In-process store. Views created with `with_prefix` share the same map.
///
/// When `max_size_bytes` is set, writes that would exceed it are rejected with
/// [`StorageError::CapacityExceeded`]; nothing is evicted.
#[derive(Clone)]
pub struct MemoryDigestCache {
    state: Arc<RwLock<MemoryState>>,
    prefix: String,
    max_size_bytes: Option<u64>,
}

impl MemoryDigestCache {
    pub fn new(max_size_bytes: Option<u64>) -> Self {
        Self {
            state: Arc::new(RwLock::new(MemoryState::default())),
            prefix: String::new(),
            max_size_bytes,
        }
    }

    pub async fn size_bytes(&self) -> u64 {
        self.state.read().await.size_bytes
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl DigestCache for MemoryDigestCache {
    async fn get(&self, ctx: &RequestContext, digest: &Digest) -> Result<Option<Vec<u8>>> {
        let key = scoped_key(ctx, &self.prefix, digest);
        let state = self.state.read().await;
        Ok(state.entries.get(&key).cloned())
    }

    async fn set(&self, ctx: &RequestContext, digest: &Digest, data: Vec<u8>) -> Result<()> {
        let key = scoped_key(ctx, &self.prefix, digest);
        let mut state = self.state.write().await;

        let replaced = state.entries.get(&key).map_or(0, |old| old.len() as u64);
        let new_size = state.size_bytes - replaced + data.len() as u64;

        if let Some(max) = self.max_size_bytes {
            if new_size > max {
                return Err(StorageError::CapacityExceeded {
                    requested: data.len() as u64,
                    available: max.saturating_sub(state.size_bytes - replaced),
                }
                .into());
            }
        }

        state.size_bytes = new_size;
        state.entries.insert(key, data);
        Ok(())
    }

    async fn contains_multi(
        &self,
        ctx: &RequestContext,
        digests: &[Digest],
    ) -> Result<HashMap<Digest, bool>> {
        let state = self.state.read().await;

        Ok(digests
            .iter()
            .map(|digest| {
                let key = scoped_key(ctx, &self.prefix, digest);
                (digest.clone(), state.entries.contains_key(&key))
            })
            .collect())
    }

    async fn delete(&self, ctx: &RequestContext, digest: &Digest) -> Result<()> {
        let key = scoped_key(ctx, &self.prefix, digest);
        let mut state = self.state.write().await;

        if let Some(old) = state.entries.remove(&key) {
            state.size_bytes -= old.len() as u64;
        }

        Ok(())
    }

    async fn touch(&self, _ctx: &RequestContext, _digest: &Digest) -> Result<()> {
        Ok(())
    }

    fn with_prefix(&self, prefix: &str) -> DynDigestCache {
        Arc::new(Self {
            state: self.state.clone(),
            prefix: format!("{}{}", self.prefix, prefix),
            max_size_bytes: self.max_size_bytes,
        })
    }
}
