use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while loading a definition file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File '{}' not found.", .0.display())]
    NotFound(PathBuf),

    #[error("Could not read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{}'", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// The definition file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::NotFound(path) => path,
            Error::Read { path, .. } | Error::Malformed { path, .. } => path,
        }
    }
}
