use std::env;

/// Server configuration, loaded from environment variables (a `.env` file is
/// honored via dotenvy at startup).
#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8080),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // No env overrides set in the test environment
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
