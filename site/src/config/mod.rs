use crate::error::{AppError, AppResult};
use config::{Config, Environment, File};

pub mod app;

pub use app::{AppConfig, LoggingConfig, OutputConfig};

/// Load the pipeline configuration.
///
/// Reads `sentinela.toml` from the working directory when present (every
/// key has a default, so the file is optional) and lets environment
/// variables prefixed with `SENTINELA__` override file values, e.g.
/// `SENTINELA__OUTPUT__STYLESHEET_PATH`.
pub fn load_config() -> AppResult<AppConfig> {
    dotenv::dotenv().ok();

    let file_source = File::with_name("sentinela").required(false);
    let env_source = Environment::with_prefix("SENTINELA").separator("__");

    let config = Config::builder()
        .add_source(file_source)
        .add_source(env_source)
        .build()
        .map_err(|e| AppError::Config(format!("Configuration loading failed: {e}")))?;

    config
        .try_deserialize::<AppConfig>()
        .map_err(|e| AppError::Config(format!("Failed to deserialize config: {e}")))
}
