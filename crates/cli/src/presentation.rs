// crates/cli/src/presentation.rs
use crate::args::Args;
use crate::error::AppError;
use clap::CommandFactory;
use rwc_engine::stats::Report;
use std::io::{self, Write};

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "{report}")
}

pub fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", crate::VERSION)
}

/// Writes the failure message, followed by the help text when the error
/// asks for it.
pub fn write_failure<W: Write>(err: &mut W, error: &AppError) -> io::Result<()> {
    writeln!(err, "{}", error.to_string().trim_end())?;
    if error.wants_help() {
        writeln!(err)?;
        write!(err, "{}", Args::command().render_help())?;
    }
    err.flush()
}
