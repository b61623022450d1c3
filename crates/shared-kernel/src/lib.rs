// crates/shared-kernel/src/lib.rs
pub use error::{Result, RwcError};

pub mod error;
pub mod value_objects;

pub use value_objects::{InputSource, LineCount, STDIN_PLACEHOLDER};
