//! Per-caller scoping of cache keys.
//!
//! Every storage call receives a [`RequestContext`]; the user prefix it
//! carries is folded into the key by the storage backend, so two callers with
//! different prefixes never observe each other's entries.

use crate::config::AuthConfig;
use crate::error::CacheError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tonic::metadata::MetadataMap;

static NAMESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[A-Za-z0-9_-]{1,64}$").expect("Failed to compile namespace regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    instance_name: String,
    user_prefix: String,
}

impl RequestContext {
    pub fn new(instance_name: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
            user_prefix: String::new(),
        }
    }

    pub fn with_user_prefix(mut self, user_prefix: impl Into<String>) -> Self {
        self.user_prefix = user_prefix.into();
        self
    }

    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// Empty, or a namespace followed by `/`.
    pub fn user_prefix(&self) -> &str {
        &self.user_prefix
    }

    /// The user prefix without its trailing separator, if any.
    pub fn namespace(&self) -> Option<&str> {
        let ns = self.user_prefix.trim_end_matches('/');
        if ns.is_empty() {
            None
        } else {
            Some(ns)
        }
    }
}

pub trait PermissionResolver: Send + Sync {
    fn attach_user_prefix(
        &self,
        ctx: RequestContext,
        metadata: &MetadataMap,
    ) -> Result<RequestContext, CacheError>;
}

pub type DynPermissionResolver = Arc<dyn PermissionResolver>;

/// Scopes callers by a namespace taken from request metadata. Callers without
/// the header share the anonymous namespace.
pub struct MetadataPermissionResolver {
    header: String,
    anonymous_prefix: String,
}

impl MetadataPermissionResolver {
    pub fn new(header: &str, anonymous_prefix: &str) -> Self {
        Self {
            header: header.to_ascii_lowercase(),
            anonymous_prefix: format!("{}/", anonymous_prefix),
        }
    }
}

impl PermissionResolver for MetadataPermissionResolver {
    fn attach_user_prefix(
        &self,
        ctx: RequestContext,
        metadata: &MetadataMap,
    ) -> Result<RequestContext, CacheError> {
        let Some(value) = metadata.get(self.header.as_str()) else {
            return Ok(ctx.with_user_prefix(self.anonymous_prefix.clone()));
        };

        let namespace = value.to_str().map_err(|_| {
            CacheError::InvalidArgument(format!("Header {} is not valid ASCII", self.header))
        })?;

        if !NAMESPACE_RE.is_match(namespace) {
            return Err(CacheError::InvalidArgument(format!(
                "Invalid namespace in header {}: {:?}",
                self.header, namespace
            )));
        }

        Ok(ctx.with_user_prefix(format!("{}/", namespace)))
    }
}

/// Leaves every request in the shared, unprefixed key space.
pub struct OpenPermissionResolver;

impl PermissionResolver for OpenPermissionResolver {
    fn attach_user_prefix(
        &self,
        ctx: RequestContext,
        _metadata: &MetadataMap,
    ) -> Result<RequestContext, CacheError> {
        Ok(ctx.with_user_prefix(String::new()))
    }
}

pub fn create_permission_resolver(config: &AuthConfig) -> DynPermissionResolver {
    if config.enabled {
        Arc::new(MetadataPermissionResolver::new(
            &config.namespace_header,
            &config.anonymous_prefix,
        ))
    } else {
        Arc::new(OpenPermissionResolver)
    }
}
