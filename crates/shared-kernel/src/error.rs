// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Every variant is fatal: it travels up to `main`, gets printed once and
/// the process exits with status 1.
#[derive(Debug, Error)]
pub enum RwcError {
    /// Command line was understood by the parser but is still unusable.
    #[error("{message}")]
    Usage { message: String },

    /// A counting mode that is accepted on the command line but not built.
    #[error("Not implemented yet: {feature}")]
    NotImplemented { feature: &'static str },

    #[error("open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RwcError>;

impl RwcError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub const fn not_implemented(feature: &'static str) -> Self {
        Self::NotImplemented { feature }
    }

    /// Whether the rendered help text should follow the message.
    pub const fn wants_help(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn open_error_mentions_path_and_os_message() {
        let err = RwcError::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("open missing.txt: "));
        assert!(msg.contains("No such file or directory"));
        assert!(!err.wants_help());
    }

    #[test]
    fn only_usage_errors_want_help() {
        assert!(RwcError::usage("unexpected extra arguments: b").wants_help());
        assert!(!RwcError::not_implemented("--words").wants_help());
        let read = RwcError::Read {
            source: io::Error::other("boom"),
        };
        assert!(!read.wants_help());
    }

    #[test]
    fn not_implemented_names_the_flag() {
        let err = RwcError::not_implemented("--bytes");
        assert_eq!(err.to_string(), "Not implemented yet: --bytes");
    }
}
