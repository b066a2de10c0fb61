//! Configuration loading for the API binary

use mp_shared::{AppConfig, Environment};

/// Outcome of [`load_config`]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// `.env.<environment>` was found and applied
    pub env_file_loaded: bool,
    /// `.env` was found and applied
    pub dotenv_loaded: bool,
}

/// Load `.env.<environment>` then `.env`, and build the configuration
///
/// Variables already present in the process environment take precedence
/// over both files.
pub fn load_config() -> LoadedConfig {
    let environment = Environment::from_env();
    let env_file_loaded = dotenvy::from_filename(environment.env_file()).is_ok();
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    LoadedConfig {
        config: AppConfig::from_env(),
        env_file_loaded,
        dotenv_loaded,
    }
}
