pub mod config;
pub mod whoami;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use whoami::WhoAmIResponse;
