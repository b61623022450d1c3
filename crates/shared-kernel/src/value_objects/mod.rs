// crates/shared-kernel/src/value_objects/mod.rs
mod counts;
mod input;

pub use counts::LineCount;
pub use input::{InputSource, STDIN_PLACEHOLDER};
