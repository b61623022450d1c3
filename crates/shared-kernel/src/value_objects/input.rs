// crates/shared-kernel/src/value_objects/input.rs
use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;

/// Argument value that selects the default stream instead of a named file.
pub const STDIN_PLACEHOLDER: &str = "-";

/// Where the counter reads its bytes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Resolves a raw positional argument; `-` maps to standard input.
    ///
    /// Any other value is taken as a path byte for byte, so names that are
    /// not valid UTF-8 still open.
    pub fn from_arg(arg: &OsStr) -> Self {
        if arg == STDIN_PLACEHOLDER {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Name printed next to the count: empty for standard input.
impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => Ok(()),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
