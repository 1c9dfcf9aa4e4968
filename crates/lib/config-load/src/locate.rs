//! Locating the config file on disk.

use std::path::{Path, PathBuf};

/// A payload annotated with the path it was read from.
#[derive(Debug)]
pub struct Located<T> {
    /// The actual payload.
    pub payload: T,

    /// The file the payload came from.
    pub path: PathBuf,
}

/// Error returned while locating the config file.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    /// None of the candidate paths exist.
    #[error("no config file found in paths: {paths:?}")]
    NotFound {
        /// The paths that were tried.
        paths: Vec<PathBuf>,
    },

    /// A candidate exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Read the first candidate that exists.
///
/// Missing files are skipped; any other read failure stops the search.
pub async fn read_first<P>(paths: &[P]) -> Result<Located<String>, LocateError>
where
    P: AsRef<Path>,
{
    for path in paths.iter().map(AsRef::as_ref) {
        match tokio::fs::read_to_string(path).await {
            Ok(payload) => {
                return Ok(Located {
                    payload,
                    path: path.to_path_buf(),
                });
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(LocateError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    Err(LocateError::NotFound {
        paths: paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
    })
}
