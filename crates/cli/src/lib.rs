// crates/cli/src/lib.rs
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod presentation;

pub const VERSION: &str = "1.0.0";
