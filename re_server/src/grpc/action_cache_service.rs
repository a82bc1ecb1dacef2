use crate::cache::ActionCacheManager;
use crate::error::CacheError;
use crate::util::format_digest;
use re_grpc_proto::build::bazel::remote::execution::v2::{
    action_cache_server::ActionCache, ActionResult, GetActionResultRequest,
    UpdateActionResultRequest,
};
use std::sync::Arc;
use tonic::{Request, Response, Status};

pub struct ActionCacheService {
    cache_manager: Arc<ActionCacheManager>,
}

impl ActionCacheService {
    pub fn new(cache_manager: Arc<ActionCacheManager>) -> Self {
        Self { cache_manager }
    }
}

fn log_failure(operation: &str, key: &str, error: &CacheError) {
    match error {
        CacheError::NotFound(_) => tracing::debug!("{} {}: {}", operation, key, error),
        CacheError::Internal(_) => tracing::error!("{} {} failed: {}", operation, key, error),
        _ => tracing::warn!("{} {} rejected: {}", operation, key, error),
    }
}

#[tonic::async_trait]
impl ActionCache for ActionCacheService {
    async fn get_action_result(
        &self,
        request: Request<GetActionResultRequest>,
    ) -> Result<Response<ActionResult>, Status> {
        let (metadata, _, req) = request.into_parts();
        let key = req
            .action_digest
            .as_ref()
            .map(format_digest)
            .unwrap_or_default();

        tracing::debug!("GetActionResult request: {}", key);

        match self.cache_manager.get_action_result(&metadata, req).await {
            Ok(result) => {
                tracing::debug!("Action result {} served from cache", key);
                Ok(Response::new(result))
            }
            Err(e) => {
                log_failure("GetActionResult", &key, &e);
                Err(e.into())
            }
        }
    }

    async fn update_action_result(
        &self,
        request: Request<UpdateActionResultRequest>,
    ) -> Result<Response<ActionResult>, Status> {
        let (metadata, _, req) = request.into_parts();
        let key = req
            .action_digest
            .as_ref()
            .map(format_digest)
            .unwrap_or_default();

        tracing::debug!("UpdateActionResult request: {}", key);

        self.cache_manager
            .update_action_result(&metadata, req)
            .await
            .map(Response::new)
            .map_err(|e| {
                log_failure("UpdateActionResult", &key, &e);
                e.into()
            })
    }
}
