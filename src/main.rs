// src/main.rs
use std::io::{self, Write};

use hostinfo::cli;
use hostinfo::collector::SysinfoSource;
use hostinfo::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    // Non-UTF-8 arguments must not abort the report.
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let selector = cli::parse_args(&argv);
    tracing::debug!(?selector, "dispatching");

    let report = cli::collect(selector, &SysinfoSource::new());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", cli::render(&report)?)?;

    Ok(())
}
