use super::traits::{DigestCache, DynDigestCache};
use crate::auth::RequestContext;
use anyhow::{Context, Result};
use async_trait::async_trait;
use re_grpc_proto::build::bazel::remote::execution::v2::Digest;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use uuid::Uuid;

/// Stores each entry as a file sharded by hash:
/// `root/<namespace>/<prefix><hash[0..2]>/<hash[2..4]>/<hash>`.
#[derive(Clone)]
pub struct FileSystemDigestCache {
    root_dir: PathBuf,
    prefix: String,
}

impl FileSystemDigestCache {
    pub fn new(root_dir: PathBuf) -> Self {
        Self {
            root_dir,
            prefix: String::new(),
        }
    }

    pub async fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.root_dir)
            .await
            .with_context(|| format!("Failed to create storage root {:?}", self.root_dir))?;
        Ok(())
    }

    fn entry_path(&self, ctx: &RequestContext, digest: &Digest) -> PathBuf {
        let mut base = self.root_dir.clone();
        if let Some(namespace) = ctx.namespace() {
            base.push(namespace);
        }

        let hash = &digest.hash;
        if hash.len() < 4 {
            return base.join(format!("{}{}", self.prefix, hash));
        }

        base.join(format!("{}{}", self.prefix, &hash[0..2]))
            .join(&hash[2..4])
            .join(hash)
    }

    async fn ensure_parent_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl DigestCache for FileSystemDigestCache {
    async fn get(&self, ctx: &RequestContext, digest: &Digest) -> Result<Option<Vec<u8>>> {
        let path = self.entry_path(ctx, digest);

        match fs::read(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to read entry {} from {:?}", digest.hash, path)
            }),
        }
    }

    async fn set(&self, ctx: &RequestContext, digest: &Digest, data: Vec<u8>) -> Result<()> {
        let path = self.entry_path(ctx, digest);
        self.ensure_parent_dir(&path).await?;

        let temp_path = path.with_extension(format!("tmp-{}", Uuid::new_v4()));
        fs::write(&temp_path, &data)
            .await
            .with_context(|| format!("Failed to write entry {} to {:?}", digest.hash, temp_path))?;

        if let Err(e) = fs::rename(&temp_path, &path).await {
            fs::remove_file(&temp_path).await.ok();
            return Err(e).with_context(|| format!("Failed to commit entry {}", digest.hash));
        }

        Ok(())
    }

    async fn contains_multi(
        &self,
        ctx: &RequestContext,
        digests: &[Digest],
    ) -> Result<HashMap<Digest, bool>> {
        let mut found = HashMap::with_capacity(digests.len());

        for digest in digests {
            let path = self.entry_path(ctx, digest);
            let exists = fs::try_exists(&path)
                .await
                .with_context(|| format!("Failed to stat entry {}", digest.hash))?;
            found.insert(digest.clone(), exists);
        }

        Ok(found)
    }

    async fn delete(&self, ctx: &RequestContext, digest: &Digest) -> Result<()> {
        let path = self.entry_path(ctx, digest);

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn touch(&self, ctx: &RequestContext, digest: &Digest) -> Result<()> {
        let path = self.entry_path(ctx, digest);

        if path.exists() {
            let now = filetime::FileTime::now();
            filetime::set_file_times(&path, now, now)?;
        }

        Ok(())
    }

    fn with_prefix(&self, prefix: &str) -> DynDigestCache {
        Arc::new(Self {
            root_dir: self.root_dir.clone(),
            prefix: format!("{}{}", self.prefix, prefix),
        })
    }
}
