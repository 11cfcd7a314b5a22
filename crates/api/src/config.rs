use std::path::PathBuf;

/// Origin wildcard accepted in `CORS_ORIGINS`.
pub const ANY_ORIGIN: &str = "*";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local use; override via
/// environment variables (a `.env` file is honoured).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `9172`).
    pub port: u16,
    /// Annotation file that rows are appended to.
    pub csv_path: PathBuf,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default           |
    /// |------------------------|-------------------|
    /// | `HOST`                 | `127.0.0.1`       |
    /// | `PORT`                 | `9172`            |
    /// | `ANNOTATIONS_CSV_PATH` | `annotations.csv` |
    /// | `CORS_ORIGINS`         | `*`               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "9172".into())
            .parse()
            .expect("PORT must be a valid u16");

        let csv_path = std::env::var("ANNOTATIONS_CSV_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("annotations.csv"));

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| ANY_ORIGIN.into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            csv_path,
            cors_origins,
            request_timeout_secs,
        }
    }

    /// Whether any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn wildcard_allows_any_origin() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            csv_path: "annotations.csv".into(),
            cors_origins: parse_origins("*"),
            request_timeout_secs: 30,
        };
        assert!(config.allows_any_origin());

        let restricted = ServerConfig {
            cors_origins: parse_origins("http://localhost:5173"),
            ..config
        };
        assert!(!restricted.allows_any_origin());
    }
}
