use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

/// Upper bound on a single node RPC round trip.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(15);

/// Node RPC endpoint and credentials.
#[derive(Clone)]
pub struct RpcConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub timeout: Duration,
}

impl RpcConfig {
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

impl fmt::Debug for RpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcConfig")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Chain constants the statistics depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainParams {
    /// Blocks between halvings; never zero.
    pub halving_interval: u64,
}

/// Immutable process configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rpc: RpcConfig,
    pub chain: ChainParams,
    pub listen: SocketAddr,
    /// Allowed CORS origin; `None` allows any origin.
    pub cors_origin: Option<String>,
}
