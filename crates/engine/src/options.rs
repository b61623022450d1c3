/// Counting modes selected for a run.
///
/// Only `lines` drives the counter today; the other modes are resolved and
/// carried so that a word/byte counter can pick them up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CountModes {
    pub lines: bool,
    pub words: bool,
    pub bytes: bool,
    pub chars: bool,
}

impl CountModes {
    /// `wc` defaults used when no mode flag was given: lines, words, bytes.
    pub const DEFAULT_SET: Self = Self {
        lines: true,
        words: true,
        bytes: true,
        chars: false,
    };

    pub const fn is_empty(self) -> bool {
        !(self.lines || self.words || self.bytes || self.chars)
    }

    /// Falls back to [`Self::DEFAULT_SET`] when nothing was selected.
    #[must_use]
    pub const fn or_default_set(self) -> Self {
        if self.is_empty() { Self::DEFAULT_SET } else { self }
    }
}
