use crate::auth::RequestContext;
use anyhow::Result;
use async_trait::async_trait;
use re_grpc_proto::build::bazel::remote::execution::v2::Digest;
use std::collections::HashMap;
use std::sync::Arc;

/// A digest-addressed key/value store, viewed through a key prefix.
///
/// Keys are derived from the request's user prefix, the view prefix and the
/// digest hash, so the same backend can hold several namespaces.
#[async_trait]
pub trait DigestCache: Send + Sync {
    async fn get(&self, ctx: &RequestContext, digest: &Digest) -> Result<Option<Vec<u8>>>;

    async fn set(&self, ctx: &RequestContext, digest: &Digest, data: Vec<u8>) -> Result<()>;

    /// Must return an entry for every requested digest.
    async fn contains_multi(
        &self,
        ctx: &RequestContext,
        digests: &[Digest],
    ) -> Result<HashMap<Digest, bool>>;

    async fn delete(&self, ctx: &RequestContext, digest: &Digest) -> Result<()>;

    async fn touch(&self, ctx: &RequestContext, digest: &Digest) -> Result<()>;

    /// A view over the same data whose keys carry `prefix` after the current one.
    fn with_prefix(&self, prefix: &str) -> DynDigestCache;
}

pub type DynDigestCache = Arc<dyn DigestCache>;

pub fn scoped_key(ctx: &RequestContext, prefix: &str, digest: &Digest) -> String {
    format!("{}{}{}", ctx.user_prefix(), prefix, digest.hash)
}
