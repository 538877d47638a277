use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub youtube_api_key: String,

    // Web server
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            youtube_api_key: required_env("YOUTUBE_API_KEY"),
            host: env::var("TUBEGRID_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("TUBEGRID_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("TUBEGRID_PORT must be a number"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
