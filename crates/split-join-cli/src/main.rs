//! split-join - Python-style slicing of delimited fields
//!
//! ```text
//! split-join <delimiter-char> <range-spec> [input-text]
//! ```
//!
//! Each input line is split on the delimiter, the fields selected by
//! `start:end` are rejoined with the same delimiter and printed. Lines come
//! from `input-text` when given, otherwise from standard input.

use std::env;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use log::debug;
use split_join_config::Config;
use split_join_engine::io::{InputError, read_lines, text_lines};

mod args;
mod driver;
mod error;

use args::Input;
use driver::Driver;
use error::CliError;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => {
            debug!("stdout closed early, stopping");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Errors go to stdout alongside the output they interrupt.
            let _ = writeln!(io::stdout(), "Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let invocation = args::parse(&args)?;

    let config = Config::load()?;
    debug!(
        "config from {}: {config:?}",
        Config::config_path().display()
    );

    let driver = Driver::new(invocation.processor, config);
    let mut out = BufWriter::new(io::stdout().lock());

    match invocation.input {
        Input::Text(text) => {
            debug!("reading lines from argument");
            driver.run(text_lines(&text).map(Ok::<_, InputError>), &mut out)
        }
        Input::Stdin => {
            debug!("reading lines from stdin");
            driver.run(read_lines(io::stdin().lock()), &mut out)
        }
    }
}
