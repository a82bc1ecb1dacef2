use super::validator::OutputValidator;
use crate::auth::{create_permission_resolver, DynPermissionResolver, RequestContext};
use crate::config::ServerConfig;
use crate::error::CacheError;
use crate::identity::WorkerIdentity;
use crate::storage::{DynDigestCache, StorageError};
use crate::util::{format_digest, validate_digest};
use prost::Message;
use re_grpc_proto::build::bazel::remote::execution::v2::digest_function::Value as DigestFunction;
use re_grpc_proto::build::bazel::remote::execution::v2::{
    ActionResult, Digest, GetActionResultRequest, UpdateActionResultRequest,
};
use tonic::metadata::MetadataMap;

/// Key prefix separating action cache entries from CAS blobs in a shared store.
pub const AC_CACHE_PREFIX: &str = "ac-";

#[derive(Debug, Clone)]
pub struct ActionCacheSettings {
    /// Accepted digest functions; the first is used when a request names none.
    pub digest_functions: Vec<DigestFunction>,
    pub update_enabled: bool,
    pub require_action_in_cas: bool,
    /// Instance for requests that leave `instance_name` empty.
    pub default_instance_name: String,
}

impl Default for ActionCacheSettings {
    fn default() -> Self {
        Self {
            digest_functions: vec![DigestFunction::Sha256],
            update_enabled: true,
            require_action_in_cas: false,
            default_instance_name: String::new(),
        }
    }
}

pub struct ActionCacheManager {
    ac: DynDigestCache,
    cas: DynDigestCache,
    validator: OutputValidator,
    permissions: DynPermissionResolver,
    worker: WorkerIdentity,
    settings: ActionCacheSettings,
}

impl ActionCacheManager {
    /// `cache` is the unprefixed store: CAS blobs are read from it directly and
    /// action results live under [`AC_CACHE_PREFIX`].
    pub fn new(
        cache: DynDigestCache,
        permissions: DynPermissionResolver,
        worker: WorkerIdentity,
        settings: ActionCacheSettings,
    ) -> Self {
        Self {
            ac: cache.with_prefix(AC_CACHE_PREFIX),
            validator: OutputValidator::new(cache.clone()),
            cas: cache,
            permissions,
            worker,
            settings,
        }
    }

    pub fn from_config(cache: DynDigestCache, config: &ServerConfig) -> anyhow::Result<Self> {
        let action_cache = &config.action_cache;
        let settings = ActionCacheSettings {
            digest_functions: action_cache.parsed_digest_functions()?,
            update_enabled: action_cache.update_enabled,
            require_action_in_cas: action_cache.require_action_in_cas,
            default_instance_name: config.server.instance_name.clone(),
        };

        Ok(Self::new(
            cache,
            create_permission_resolver(&config.auth),
            WorkerIdentity::from_config(action_cache.worker_id.as_deref()),
            settings,
        ))
    }

    pub fn worker(&self) -> &WorkerIdentity {
        &self.worker
    }

    fn digest_function(&self, requested: i32) -> Result<DigestFunction, CacheError> {
        let requested = DigestFunction::try_from(requested).map_err(|_| {
            CacheError::InvalidArgument(format!("Unknown digest function: {}", requested))
        })?;

        if requested == DigestFunction::Unknown {
            return Ok(self
                .settings
                .digest_functions
                .first()
                .copied()
                .unwrap_or(DigestFunction::Sha256));
        }

        if self.settings.digest_functions.contains(&requested) {
            Ok(requested)
        } else {
            Err(CacheError::InvalidArgument(format!(
                "Digest function {} is not supported",
                requested.as_str_name()
            )))
        }
    }

    fn scope(
        &self,
        instance_name: &str,
        metadata: &MetadataMap,
    ) -> Result<RequestContext, CacheError> {
        let instance_name = if instance_name.is_empty() {
            self.settings.default_instance_name.as_str()
        } else {
            instance_name
        };

        self.permissions
            .attach_user_prefix(RequestContext::new(instance_name), metadata)
    }

    pub async fn get_action_result(
        &self,
        metadata: &MetadataMap,
        request: GetActionResultRequest,
    ) -> Result<ActionResult, CacheError> {
        let action_digest = request.action_digest.as_ref().ok_or_else(|| {
            CacheError::InvalidArgument("ActionDigest is a required field".to_string())
        })?;
        let function = self.digest_function(request.digest_function)?;
        validate_digest(action_digest, function)?;

        let ctx = self.scope(&request.instance_name, metadata)?;
        let key = format_digest(action_digest);

        let blob = match self.ac.get(&ctx, action_digest).await {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                return Err(CacheError::NotFound(format!(
                    "ActionResult ({}) not found",
                    key
                )));
            }
            Err(e) => {
                return Err(CacheError::NotFound(format!(
                    "ActionResult ({}) not found: {:#}",
                    key, e
                )));
            }
        };

        let result = ActionResult::decode(&blob[..]).map_err(|e| {
            CacheError::Internal(format!("Failed to decode ActionResult ({}): {}", key, e))
        })?;

        if let Err(e) = self
            .validator
            .validate_action_result(&ctx, &result, function)
            .await
        {
            if e.is_internal() {
                return Err(CacheError::Internal(format!(
                    "ActionResult ({}) could not be validated: {}",
                    key, e
                )));
            }

            tracing::debug!(
                "ActionResult {} in instance '{}' failed output validation: {}",
                key,
                ctx.instance_name(),
                e
            );
            return Err(CacheError::NotFound(format!(
                "ActionResult ({}) not found: {}",
                key, e
            )));
        }

        if let Err(e) = self.ac.touch(&ctx, action_digest).await {
            tracing::warn!("Failed to touch action result {}: {:#}", key, e);
        }

        Ok(result)
    }

    pub async fn update_action_result(
        &self,
        metadata: &MetadataMap,
        request: UpdateActionResultRequest,
    ) -> Result<ActionResult, CacheError> {
        if !self.settings.update_enabled {
            return Err(CacheError::PermissionDenied(
                "UpdateActionResult is disabled on this server".to_string(),
            ));
        }

        let action_digest = request.action_digest.ok_or_else(|| {
            CacheError::InvalidArgument("ActionDigest is a required field".to_string())
        })?;
        let mut action_result = request.action_result.ok_or_else(|| {
            CacheError::InvalidArgument("ActionResult is a required field".to_string())
        })?;
        let function = self.digest_function(request.digest_function)?;
        validate_digest(&action_digest, function)?;

        let ctx = self.scope(&request.instance_name, metadata)?;
        let key = format_digest(&action_digest);

        if self.settings.require_action_in_cas {
            self.check_action_uploaded(&ctx, &action_digest).await?;
        }

        self.stamp_worker(&mut action_result);

        let blob = action_result.encode_to_vec();
        self.ac
            .set(&ctx, &action_digest, blob)
            .await
            .map_err(|e| match e.downcast_ref::<StorageError>() {
                Some(StorageError::CapacityExceeded { .. }) => CacheError::ResourceExhausted(
                    format!("Failed to store ActionResult ({}): {}", key, e),
                ),
                None => CacheError::Internal(format!(
                    "Failed to store ActionResult ({}): {:#}",
                    key, e
                )),
            })?;

        Ok(action_result)
    }

    async fn check_action_uploaded(
        &self,
        ctx: &RequestContext,
        action_digest: &Digest,
    ) -> Result<(), CacheError> {
        if action_digest.size_bytes == 0 {
            return Ok(());
        }

        let key = format_digest(action_digest);
        let found = self
            .cas
            .contains_multi(ctx, std::slice::from_ref(action_digest))
            .await
            .map_err(|e| {
                CacheError::Internal(format!("Failed to look up Action ({}): {:#}", key, e))
            })?;

        match found.get(action_digest) {
            Some(true) => Ok(()),
            Some(false) => Err(CacheError::FailedPrecondition(format!(
                "Action ({}) must be uploaded to the CAS before its result",
                key
            ))),
            None => Err(CacheError::Internal(format!(
                "Inconsistent result from contains_multi (missing {})",
                key
            ))),
        }
    }

    /// Overwrites the worker name; clients cannot choose what is recorded here.
    fn stamp_worker(&self, action_result: &mut ActionResult) {
        action_result
            .execution_metadata
            .get_or_insert_with(Default::default)
            .worker = self.worker.to_string();
    }
}
