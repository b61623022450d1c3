// crates/cli/src/error.rs
use clap::error::ErrorKind;
use rwc_shared_kernel::RwcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Clap rejected the command line.
    #[error(transparent)]
    Parse(#[from] clap::Error),

    #[error(transparent)]
    Rwc(#[from] RwcError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Whether rendered help should follow the message on stderr.
    pub fn wants_help(&self) -> bool {
        match self {
            Self::Parse(e) => !matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ),
            Self::Rwc(e) => e.wants_help(),
            Self::Io(_) => false,
        }
    }
}
