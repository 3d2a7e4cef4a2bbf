pub mod database;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use dns::{DnsConfig, ResponsePolicy, AUTHORITATIVE, DEFAULT_ANSWER_TTL};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
