//! `sleep-risk <age> <gender> <sleep> <stress> <bmi> <snoring>`
//!
//! Prints one risk label and always exits 0. Anything that stops the
//! rules from running prints the healthy label instead.

mod cli;
mod logging;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use logging::{init_logging, LogFormat};
use std::ffi::OsString;
use tracing::debug;

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();

    let line = match Cli::try_parse_from(&args) {
        Ok(cli) => {
            init_logging(cli.log_format);
            cli::render(&cli)
        }
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                init_logging(LogFormat::Compact);
                debug!(error = %err.kind(), "command line rejected");
                cli::fallback(cli::wants_json(&args))
            }
        },
    };

    println!("{line}");
}
