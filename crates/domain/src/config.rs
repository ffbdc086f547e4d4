pub mod errors;
pub mod keep_alive;
pub mod logging;
pub mod rate_limit;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use keep_alive::KeepAliveConfig;
pub use logging::LoggingConfig;
pub use rate_limit::RateLimitConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
