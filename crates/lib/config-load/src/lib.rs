//! Configuration loading orchestration for mail-biff.

use std::path::PathBuf;

use config_core::Config;

mod locate;

pub use locate::*;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "MAIL_BIFF_CONFIG";

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No config file could be read.
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// The config file was found but is not valid.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying YAML error.
        #[source]
        source: serde_yaml_bw::Error,
    },
}

/// Load configuration honouring the [`CONFIG_ENV_VAR`] override.
pub async fn with_default_env_var() -> Result<Located<Config>, LoadError> {
    let env_path = std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    with(env_path).await
}

/// Load configuration from the override path, or from the first existing default path.
pub async fn with(env_path: Option<PathBuf>) -> Result<Located<Config>, LoadError> {
    let paths: Vec<PathBuf> = config_paths::resolve(env_path).collect();
    let Located { path, payload } = locate::read_first(&paths).await?;
    let config = config_yaml::parse_str(&payload).map_err(|source| LoadError::Parse {
        path: path.clone(),
        source,
    })?;
    Ok(Located {
        payload: config,
        path,
    })
}
