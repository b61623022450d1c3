// crates/engine/src/lib.rs
pub mod config;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::stats::Report;
use log::debug;
use rwc_shared_kernel::Result;

pub use rwc_shared_kernel::{InputSource, LineCount, RwcError};

/// Run the line counter over the configured input.
///
/// # Errors
///
/// Returns [`RwcError::Open`] when the named file cannot be opened and
/// [`RwcError::Read`] when reading fails part way through.
pub fn run(config: &Config) -> Result<Report> {
    debug!("modes: {:?}", config.modes);
    let lines = processor::count_input(&config.input)?;
    debug!("counted {lines} lines");

    Ok(Report {
        lines,
        input: config.input.clone(),
    })
}
