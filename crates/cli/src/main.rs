use log::trace;
use rwc_cli::{app, presentation};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("RWC_LOG")
        .init();

    trace!("init");
    match app::run(std::env::args_os(), &mut io::stdout().lock()) {
        Ok(()) => {
            trace!("done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // stderr が閉じている場合は報告を諦める
            let _ = presentation::write_failure(&mut io::stderr().lock(), &e);
            ExitCode::FAILURE
        }
    }
}
