pub mod error;
pub mod filesystem;
pub mod memory;
pub mod traits;

pub use error::StorageError;
pub use filesystem::FileSystemDigestCache;
pub use memory::MemoryDigestCache;
pub use traits::{scoped_key, DigestCache, DynDigestCache};

use crate::config::StorageConfig;
use anyhow::Result;
use std::sync::Arc;

pub async fn create_digest_cache(config: &StorageConfig) -> Result<DynDigestCache> {
    match config {
        StorageConfig::FileSystem { root_dir } => {
            let store = FileSystemDigestCache::new(root_dir.clone());
            store.init().await?;
            Ok(Arc::new(store))
        }
        StorageConfig::Memory { max_size_bytes } => {
            Ok(Arc::new(MemoryDigestCache::new(*max_size_bytes)))
        }
    }
}
