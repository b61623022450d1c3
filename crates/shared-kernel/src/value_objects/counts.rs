// crates/shared-kernel/src/value_objects/counts.rs
use std::ops::AddAssign;

/// Number of lines seen in one input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCount(usize);

impl LineCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl AddAssign<usize> for LineCount {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

mod display {
    use std::fmt;

    use super::LineCount;

    impl fmt::Display for LineCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
