use triangulate_geometry::Config as GeometryConfig;

/// CLI-level config: the geometry core's tunables plus a log level,
/// overridable by either environment variables or the matching CLI flags
/// (flags win). Mirrors this codebase family's `Config::from_env` idiom.
#[derive(Debug, Clone)]
pub struct Config {
    pub geometry: GeometryConfig,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        Self {
            geometry: GeometryConfig::from_env(),
            log_level,
        }
    }
}
