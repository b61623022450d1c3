// crates/cli/src/app.rs
use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use crate::presentation;
use clap::Parser;
use clap::error::ErrorKind;
use log::debug;
use std::ffi::OsString;
use std::io::Write;

/// Parses `argv`, counts, and writes the result to `out`.
///
/// Help and version output also go to `out`. Every failure is returned to
/// the caller, which owns printing it and choosing the exit status.
pub fn run<I, T, W>(argv: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            write!(out, "{e}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if args.version {
        presentation::write_version(out)?;
        return Ok(());
    }

    let config = Config::try_from(args)?;
    debug!("resolved config: {config:?}");

    let report = rwc_engine::run(&config)?;
    presentation::write_report(out, &report)?;
    Ok(())
}
