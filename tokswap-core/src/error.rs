use std::io;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid ruleset: {0}")]
    InvalidRuleset(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type InternalResult<T> = Result<T, RewriteError>;

impl RewriteError {
    /// Classify an I/O failure on `path` into the rewrite error taxonomy.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let shown = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => RewriteError::NotFound(shown),
            io::ErrorKind::PermissionDenied => {
                RewriteError::PermissionDenied(format!("{}: {}", shown, err))
            }
            _ => RewriteError::Io {
                path: shown,
                source: err,
            },
        }
    }

    pub fn invalid_ruleset<S: Into<String>>(message: S) -> Self {
        RewriteError::InvalidRuleset(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        RewriteError::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_by_kind() {
        let path = Path::new("src/App.tsx");

        let err = RewriteError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, RewriteError::NotFound(ref p) if p == "src/App.tsx"));

        let err = RewriteError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, RewriteError::PermissionDenied(_)));

        let err = RewriteError::from_io(path, io::Error::from(io::ErrorKind::InvalidData));
        assert!(matches!(err, RewriteError::Io { .. }));
    }
}
