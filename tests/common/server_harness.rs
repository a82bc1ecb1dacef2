use anyhow::{Context, Result};
use re_grpc_proto::build::bazel::remote::execution::v2::action_cache_client::ActionCacheClient;
use re_grpc_proto::build::bazel::remote::execution::v2::action_cache_server::ActionCacheServer;
use re_server::auth::RequestContext;
use re_server::cache::ActionCacheManager;
use re_server::config::*;
use re_server::grpc::ActionCacheService;
use re_server::storage::{create_digest_cache, DigestCache, DynDigestCache};
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tonic::transport::{Channel, Server};

pub struct ServerHarness {
    server_handle: JoinHandle<Result<()>>,
    server_addr: SocketAddr,
    /// The unprefixed store behind the server. This server exposes no CAS
    /// service, so tests seed and evict blobs here directly.
    cache: DynDigestCache,
    _temp_dir: TempDir,
}

impl ServerHarness {
    pub async fn start() -> Result<Self> {
        Self::start_with(ActionCacheConfig {
            worker_id: Some("harness-worker".to_string()),
            ..Default::default()
        })
        .await
    }

    pub async fn start_with(action_cache: ActionCacheConfig) -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp directory")?;

        let config = ServerConfig {
            server: ServerSettings {
                address: "127.0.0.1:0".to_string(),
                instance_name: "test".to_string(),
            },
            storage: StorageConfig::FileSystem {
                root_dir: temp_dir.path().join("cache"),
            },
            action_cache,
            auth: AuthConfig::default(),
        };

        let cache = create_digest_cache(&config.storage).await?;
        let cache_manager = Arc::new(ActionCacheManager::from_config(cache.clone(), &config)?);
        let action_cache_service = ActionCacheService::new(cache_manager);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let server_addr = listener.local_addr()?;

        tracing::info!("Test server starting on {}", server_addr);

        let server_handle = tokio::spawn(async move {
            Server::builder()
                .add_service(ActionCacheServer::new(action_cache_service))
                .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
                .await
                .context("Server failed")
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            server_handle,
            server_addr,
            cache,
            _temp_dir: temp_dir,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.server_addr)
    }

    /// Stores `data` as a CAS blob in `namespace` and returns its digest.
    pub async fn put_blob(
        &self,
        namespace: &str,
        data: &[u8],
    ) -> Result<re_grpc_proto::build::bazel::remote::execution::v2::Digest> {
        let digest = re_server::util::compute_digest(data);
        let ctx = RequestContext::new("test").with_user_prefix(format!("{}/", namespace));
        self.cache.set(&ctx, &digest, data.to_vec()).await?;
        Ok(digest)
    }

    pub async fn evict_blob(
        &self,
        namespace: &str,
        digest: &re_grpc_proto::build::bazel::remote::execution::v2::Digest,
    ) -> Result<()> {
        let ctx = RequestContext::new("test").with_user_prefix(format!("{}/", namespace));
        self.cache.delete(&ctx, digest).await
    }

    pub async fn client(&self) -> Result<ActionCacheClient<Channel>> {
        ActionCacheClient::connect(self.url())
            .await
            .context("Failed to connect to test server")
    }

    pub async fn shutdown(self) -> Result<()> {
        self.server_handle.abort();
        Ok(())
    }
}

impl Drop for ServerHarness {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}
