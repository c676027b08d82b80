use super::RequestsLoggingLevel;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}
