use std::env;
use std::io;
use std::process;

use anyhow::{bail, Context, Result};
use env_logger::{self as logger};

use regex_engine::input::{self, Lines};
use regex_engine::Limits;

const LOG_VAR: &str = "REGEX_ENGINE_LOG";
const LOG_STYLE_VAR: &str = "REGEX_ENGINE_LOG_STYLE";

// Usage:
//   echo 'pattern|subject' | regex-engine      prints True or False for each line
//   echo <subject> | regex-engine -E <pattern>  exits with 0 on a match and 1 otherwise
fn main() {
    init_logging();

    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(2);
        }
    }
}

fn init_logging() {
    if env::var(LOG_VAR).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(LOG_VAR).write_style(LOG_STYLE_VAR))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<i32> {
    let limits = Limits::from_env().context("failed to load limits")?;
    let args: Vec<String> = env::args().skip(1).collect();
    let mut lines = Lines::new(io::stdin().lock());

    match args.as_slice() {
        [] => {
            input::evaluate(&mut lines, limits, &mut io::stdout().lock())?;
            Ok(0)
        }
        [flag, pattern] if flag == "-E" => {
            let regex = input::compile(pattern, limits);
            Ok(if input::match_first_line(&regex, &mut lines)? { 0 } else { 1 })
        }
        _ => bail!("usage: regex-engine [-E <pattern>]"),
    }
}
