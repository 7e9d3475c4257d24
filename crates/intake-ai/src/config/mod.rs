use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub valuation: ValuationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("INTAKE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("INTAKE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("INTAKE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("INTAKE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let enabled_domains = parse_domain_list(env::var("INTAKE_DOMAINS").ok().as_deref());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            valuation: ValuationConfig { enabled_domains },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Which case domains the service exposes. `None` serves the full catalog.
#[derive(Debug, Clone, Default)]
pub struct ValuationConfig {
    pub enabled_domains: Option<Vec<String>>,
}

impl ValuationConfig {
    pub fn is_enabled(&self, slug: &str) -> bool {
        match &self.enabled_domains {
            None => true,
            Some(domains) => domains.iter().any(|enabled| enabled == slug),
        }
    }
}

/// `INTAKE_DOMAINS` holds a comma-separated slug list; blank or "all" opts
/// into the full catalog.
fn parse_domain_list(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw?.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return None;
    }

    let domains: Vec<String> = raw
        .split(',')
        .map(|slug| slug.trim().to_ascii_lowercase())
        .filter(|slug| !slug.is_empty())
        .collect();

    if domains.is_empty() {
        None
    } else {
        Some(domains)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "INTAKE_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "INTAKE_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("INTAKE_ENV");
        env::remove_var("INTAKE_HOST");
        env::remove_var("INTAKE_PORT");
        env::remove_var("INTAKE_LOG_LEVEL");
        env::remove_var("INTAKE_DOMAINS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.valuation.enabled_domains.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("INTAKE_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn parses_enabled_domain_list() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("INTAKE_DOMAINS", "Talc, rideshare ,,");
        let config = AppConfig::load().expect("config loads");
        let domains = config
            .valuation
            .enabled_domains
            .as_deref()
            .expect("domains parsed");
        assert_eq!(domains, ["talc".to_string(), "rideshare".to_string()]);
        assert!(config.valuation.is_enabled("talc"));
        assert!(!config.valuation.is_enabled("asbestos"));
    }

    #[test]
    fn treats_all_keyword_as_full_catalog() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("INTAKE_DOMAINS", "ALL");
        let config = AppConfig::load().expect("config loads");
        assert!(config.valuation.enabled_domains.is_none());
        assert!(config.valuation.is_enabled("clergy-abuse"));
    }
}
