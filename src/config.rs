/*
 * Responsibility
 * - 環境変数や設定の読み込み (BLOG_BACKEND_URL, CORS 許可、タイムアウトなど)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// `BLOG_BACKEND_URL` value that selects the in-process backend.
pub const MEMORY_BACKEND: &str = "memory";

/// Upper bound for `BACKEND_TIMEOUT_SECONDS` (10 minutes).
pub const MAX_BACKEND_TIMEOUT_SECONDS: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendTarget {
    Http(String),
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub backend: BackendTarget,
    pub backend_timeout: Duration,

    pub related_pool_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = get("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let backend_url = get("BLOG_BACKEND_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("BLOG_BACKEND_URL"))?;
        let backend = if backend_url == MEMORY_BACKEND {
            BackendTarget::Memory
        } else {
            BackendTarget::Http(backend_url)
        };

        let backend_timeout = match get("BACKEND_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| (1..=MAX_BACKEND_TIMEOUT_SECONDS).contains(secs))
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid("BACKEND_TIMEOUT_SECONDS"))?,
            None => Duration::from_secs(10),
        };

        let related_pool_limit = match get("RELATED_POOL_LIMIT") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid("RELATED_POOL_LIMIT"))?,
            None => 4,
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            backend,
            backend_timeout,
            related_pool_limit,
        })
    }
}
