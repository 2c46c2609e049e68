use std::env;

/// Top-level configuration for the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl WebServerConfig {
    /// Build a config from `SF_WEB_BIND` / `SF_WEB_PORT`, falling back to the
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let bind = env::var("SF_WEB_BIND").unwrap_or(defaults.bind);
        let port = env::var("SF_WEB_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.port);
        Self { bind, port }
    }
}
