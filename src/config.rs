use std::env;
use std::net::SocketAddr;

/// Process configuration, read from the environment (with a `.env` file
/// loaded first if present). Mirrors the `LEAGUE_SIM_*` surface documented
/// for the service; every field has a sane default so the binary runs
/// out of the box in development.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `.env` (if present) and the process environment,
    /// falling back to defaults for anything unset.
    pub fn load() -> Self {
        // Ignore the error: a missing .env file is the common case in
        // production, where configuration comes from the real environment.
        let _ = dotenv::dotenv();

        let defaults = Settings::default();
        Settings {
            host: env::var("LEAGUE_SIM_HOST").unwrap_or(defaults.host),
            port: env::var("LEAGUE_SIM_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            log_level: env::var("LEAGUE_SIM_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], self.port)))
    }
}
