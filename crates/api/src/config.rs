use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Lifetime of cached featured/stats/about responses (default: `300`).
    pub cache_ttl_secs: u64,
    /// Address clients reach this server at; prefix for uploaded media URLs.
    pub public_base_url: String,
    /// Directory uploaded files are written to and served from.
    pub media_root: PathBuf,
    /// Largest accepted upload body (default: 50 MiB).
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `8000`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `CACHE_TTL_SECS`       | `300`                    |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:8000`  |
    /// | `MEDIA_ROOT`           | `media`                  |
    /// | `MAX_UPLOAD_BYTES`     | `52428800`               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cache_ttl_secs: u64 = std::env::var("CACHE_TTL_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("CACHE_TTL_SECS must be a valid u64");

        let public_base_url =
            std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".into());

        let media_root = PathBuf::from(std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".into()));

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "52428800".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            cache_ttl_secs,
            public_base_url,
            media_root,
            max_upload_bytes,
        }
    }
}
