use anyhow::Result;
use clap::Parser;
use re_server::{
    cache::ActionCacheManager, config::ServerConfig, grpc::ActionCacheService,
    storage::create_digest_cache,
};
use std::path::PathBuf;
use std::sync::Arc;
use tonic::transport::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use re_grpc_proto::build::bazel::remote::execution::v2::action_cache_server::ActionCacheServer;

#[derive(Parser)]
#[command(name = "re-server")]
#[command(author = "ExpBuild Team")]
#[command(version)]
#[command(about = "Remote Execution API action cache server", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = ServerConfig::from_file(&cli.config)?;

    tracing::info!("Initializing storage...");
    let cache = create_digest_cache(&config.storage).await?;

    let cache_manager = Arc::new(ActionCacheManager::from_config(cache, &config)?);
    tracing::info!("Action cache worker id: {}", cache_manager.worker());

    if !config.action_cache.update_enabled {
        tracing::info!("UpdateActionResult is disabled");
    }

    let action_cache_service = ActionCacheService::new(cache_manager);

    let addr = config.server.address.parse()?;
    tracing::info!("Starting server on {}", addr);

    Server::builder()
        .add_service(ActionCacheServer::new(action_cache_service))
        .serve(addr)
        .await?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "re_server=debug,re_server_bin=debug"
    } else {
        "re_server=info,re_server_bin=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
