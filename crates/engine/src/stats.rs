use rwc_shared_kernel::{InputSource, LineCount};
use std::fmt;

/// Outcome of a counting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub lines: LineCount,
    pub input: InputSource,
}

/// `<count> <name>`; the name is empty for standard input.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lines, self.input)
    }
}
