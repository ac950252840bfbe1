use std::{net::SocketAddr, str::FromStr, time::Duration};

use country_radar_indicators::{EngineConfig, ResolveStrategy};

const DEFAULT_LISTEN_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub engine: EngineConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr = std::env::var("CR_LISTEN_ADDR")
            .ok()
            .and_then(|raw| match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => Some(addr),
                Err(_) => {
                    tracing::warn!("Invalid CR_LISTEN_ADDR '{}', using the default", raw);
                    None
                }
            })
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_LISTEN_ADDR));
        let cors_allow = std::env::var("CR_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let mut engine = EngineConfig::default();
        engine.indicator_ttl = Duration::from_secs(env_or("CR_INDICATOR_TTL_SECS", 900));
        engine.snapshot_ttl = Duration::from_secs(env_or("CR_SNAPSHOT_TTL_SECS", 600));
        engine.indicator_deadline =
            Duration::from_millis(env_or("CR_INDICATOR_DEADLINE_MS", 20_000));
        engine.strategy = env_or("CR_RESOLVE_STRATEGY", ResolveStrategy::Sequential);
        engine.http.timeout = Duration::from_millis(env_or("CR_PROVIDER_TIMEOUT_MS", 8_000));
        engine.http.backoff = Duration::from_millis(env_or("CR_PROVIDER_RETRY_BACKOFF_MS", 600));
        override_url("CR_WORLD_BANK_BASE_URL", &mut engine.endpoints.world_bank);
        override_url("CR_EUROSTAT_BASE_URL", &mut engine.endpoints.eurostat);
        override_url("CR_DBNOMICS_BASE_URL", &mut engine.endpoints.dbnomics);
        override_url("CR_ECB_BASE_URL", &mut engine.endpoints.ecb);

        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(env_or("CR_REQUEST_TIMEOUT_MS", 30_000)),
            engine,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(DEFAULT_LISTEN_ADDR),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            engine: EngineConfig::default(),
        }
    }
}

/// Parse an env var, keeping `default` when it is unset or malformed.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}='{}'", name, raw);
            default
        }),
        Err(_) => default,
    }
}

fn override_url(name: &str, target: &mut String) {
    if let Ok(value) = std::env::var(name) {
        let value = value.trim().trim_end_matches('/');
        if !value.is_empty() {
            *target = value.to_string();
        }
    }
}
