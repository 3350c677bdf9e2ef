use clap::Parser;
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use crate::api::ApiServer;
use crate::app::config::{AppConfig, ChainParams, RpcConfig, RPC_TIMEOUT};
use crate::rpc::RpcClient;
use crate::utils::logging::init_logging;

/// Chain statistics API. Every option can also be supplied through the
/// environment variable named next to it.
#[derive(Parser, Debug)]
#[command(name = "palladium-api", version, about)]
pub struct Cli {
    /// Node RPC scheme (http or https)
    #[arg(long, env = "RPC_SCHEME")]
    pub rpc_scheme: String,

    /// Node RPC host
    #[arg(long, env = "RPC_HOST")]
    pub rpc_host: String,

    /// Node RPC port
    #[arg(long, env = "RPC_PORT")]
    pub rpc_port: u16,

    /// Node RPC basic-auth user
    #[arg(long, env = "RPC_USER", default_value = "")]
    pub rpc_user: String,

    /// Node RPC basic-auth password
    #[arg(long, env = "RPC_PASSWORD", default_value = "", hide_env_values = true)]
    pub rpc_password: String,

    /// Blocks between halvings
    #[arg(long, env = "HALVING_INTERVAL", value_parser = clap::value_parser!(u64).range(1..))]
    pub halving_interval: u64,

    /// HTTP bind address (host:port)
    #[arg(long, env = "API_LISTEN", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Allowed CORS origin (any origin when unset)
    #[arg(long, env = "CORS_ALLOW_ORIGIN")]
    pub cors_origin: Option<String>,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            rpc: RpcConfig {
                scheme: self.rpc_scheme,
                host: self.rpc_host,
                port: self.rpc_port,
                user: self.rpc_user,
                password: self.rpc_password,
                timeout: RPC_TIMEOUT,
            },
            chain: ChainParams { halving_interval: self.halving_interval },
            listen: self.listen,
            cors_origin: self.cors_origin,
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = cli.into_config();
    let client = Arc::new(RpcClient::new(&config.rpc)?);
    info!(
        rpc = client.url(),
        halving_interval = config.chain.halving_interval,
        "configuration loaded"
    );

    let server = ApiServer::new(config, client);
    let svc = server.start().await?;

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("shutting down API server...");
    svc.shutdown().await?;
    info!("API server stopped");
    Ok(())
}
