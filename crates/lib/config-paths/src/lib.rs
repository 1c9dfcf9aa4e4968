//! Default configuration file paths for mail-biff.

use std::path::PathBuf;

use either::Either;

/// Returns an iterator over default configuration file paths.
///
/// The paths are yielded in order of preference:
/// 1. Dotfile in the home directory
/// 2. User-specific config directory (XDG standard)
/// 3. Legacy `imapbiffrc` dotfile in the home directory
pub fn defaults() -> impl Iterator<Item = PathBuf> {
    let home_path = dirs::home_dir()
        .into_iter()
        .map(|d| d.join(".mail-biff.yaml"));
    let config_path = dirs::config_dir()
        .into_iter()
        .map(|d| d.join("mail-biff/config.yaml"));
    let legacy_path = dirs::home_dir()
        .into_iter()
        .map(|d| d.join(".imapbiffrc"));

    home_path.chain(config_path).chain(legacy_path)
}

/// Resolves configuration paths based on environment override or defaults.
///
/// If an environment path is provided, returns an iterator containing only that path.
/// Otherwise, returns the default configuration paths.
pub fn resolve(env_path: Option<PathBuf>) -> impl Iterator<Item = PathBuf> {
    match env_path {
        Some(val) => Either::Left(std::iter::once(val)),
        None => Either::Right(defaults()),
    }
}
