pub mod config;
pub mod service_handle;
pub mod cli;

pub use config::{AppConfig, ChainParams, RpcConfig};
pub use service_handle::ServiceHandle;
pub use cli::run_cli;
