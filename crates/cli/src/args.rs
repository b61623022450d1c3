// crates/cli/src/args.rs
use std::ffi::{OsStr, OsString};

use clap::{Parser, ValueHint};
use rwc_shared_kernel::STDIN_PLACEHOLDER;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "rwc",
    about = "Print the newline count of FILE (standard input when FILE is - or missing)",
    disable_version_flag = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// print the byte counts
    #[arg(short = 'c', long)]
    pub bytes: bool,

    /// print the character counts
    #[arg(short = 'm', long)]
    pub chars: bool,

    /// print the newline counts
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// print the word counts
    #[arg(short = 'w', long)]
    pub words: bool,

    /// print the maximum display width
    #[arg(short = 'L', long, value_name = "N", default_value_t = 0)]
    pub max_line_length: u64,

    /// read input from the files specified by NUL-terminated names in file FILE;
    /// if FILE is - then read names from standard input
    #[arg(long = "files0from", value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files0from: Option<OsString>,

    /// print the version of the program and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// filename for reading
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<OsString>,
}

impl Args {
    /// The single positional filename, `-` when none was given.
    pub fn file(&self) -> &OsStr {
        self.files
            .first()
            .map_or(OsStr::new(STDIN_PLACEHOLDER), OsString::as_os_str)
    }

    /// Positional arguments past the first one.
    pub fn extra(&self) -> &[OsString] {
        self.files.get(1..).unwrap_or_default()
    }

    /// First requested mode that has no counter behind it yet.
    pub fn unsupported_mode(&self) -> Option<&'static str> {
        if self.bytes {
            Some("--bytes")
        } else if self.chars {
            Some("--chars")
        } else if self.words {
            Some("--words")
        } else if self.max_line_length != 0 {
            Some("--max-line-length")
        } else if self
            .files0from
            .as_ref()
            .is_some_and(|name| !name.is_empty())
        {
            Some("--files0from")
        } else {
            None
        }
    }
}
