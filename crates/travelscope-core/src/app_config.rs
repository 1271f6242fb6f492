use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Origin of the security advisory publisher, without trailing slash.
    pub advisory_base_url: String,
    /// Origin of the health advisory publisher, without trailing slash.
    pub health_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
}
