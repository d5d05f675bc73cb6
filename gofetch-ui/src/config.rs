use std::time::Duration;

use gofetch_api::Pagination;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Which response contract the front-end speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// `q` only; bare list of scored results.
    Legacy,
    /// `q&page&limit`; `{ total, data }` envelope with a timing header.
    Paginated,
}

impl std::str::FromStr for ApiMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "v1" => Ok(ApiMode::Legacy),
            "paginated" | "v2" => Ok(ApiMode::Paginated),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid api base url {url:?}: {source}")]
    InvalidBase {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported api base scheme: {0} (expected http or https)")]
    UnsupportedScheme(String),
    #[error("unknown api mode: {0:?} (expected legacy or paginated)")]
    UnknownMode(String),
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub api_base: Url,
    pub mode: ApiMode,
    pub page: u32,                 // 1
    pub limit: u32,                // 10
    pub request_timeout: Duration, // 10s
    /// true: the host prints the whole page after each update instead of the results container.
    pub print_page: bool, // false
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default api base is a valid url"),
            mode: ApiMode::Paginated,
            page: 1,
            limit: 10,
            request_timeout: Duration::from_secs(10),
            print_page: false,
        }
    }
}

impl UiConfig {
    /// - GOFETCH_API_BASE (default http://localhost:8080)
    /// - GOFETCH_API_MODE (legacy | paginated, default paginated)
    /// - GOFETCH_PAGE (default 1)
    /// - GOFETCH_LIMIT (default 10)
    /// - GOFETCH_TIMEOUT_SECS (default 10; 0 keeps the default)
    /// - GOFETCH_PRINT_PAGE (bool, default false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`UiConfig::from_env`] but reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(base) = lookup("GOFETCH_API_BASE").filter(|s| !s.trim().is_empty()) {
            cfg.api_base = parse_base(base.trim())?;
        }
        if let Some(mode) = lookup("GOFETCH_API_MODE").filter(|s| !s.trim().is_empty()) {
            cfg.mode = mode.parse()?;
        }

        cfg.page = parse_u32(&lookup, "GOFETCH_PAGE", cfg.page);
        cfg.limit = parse_u32(&lookup, "GOFETCH_LIMIT", cfg.limit);
        // a zero timeout would fail every request immediately
        let timeout_secs = parse_u64(&lookup, "GOFETCH_TIMEOUT_SECS", 0);
        if timeout_secs > 0 {
            cfg.request_timeout = Duration::from_secs(timeout_secs);
        }
        cfg.print_page = parse_bool(&lookup, "GOFETCH_PRINT_PAGE", cfg.print_page);

        Ok(cfg)
    }

    /// Paging parameters to forward, if the mode sends any.
    pub fn pagination(&self) -> Option<Pagination> {
        match self.mode {
            ApiMode::Legacy => None,
            ApiMode::Paginated => Some(Pagination {
                page: self.page,
                limit: self.limit,
            }),
        }
    }
}

fn parse_base(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidBase {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_u32<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str, default: u32) -> u32 {
    lookup(key)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_u64<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_bool<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str, default: bool) -> bool {
    lookup(key)
        .map(|s| {
            let s = s.trim().to_ascii_lowercase();
            matches!(s.as_str(), "1" | "true" | "yes" | "on")
        })
        .unwrap_or(default)
}
