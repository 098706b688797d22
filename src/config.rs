/// Compile-time application configuration.
///
/// Values come from environment variables injected by `build.rs` (which reads
/// them from a `.env` file when present), with sensible defaults for local
/// development.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: option_env!("SIMBA_WATCH_API_URL")
                .unwrap_or("http://localhost:8001")
                .to_string(),
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
