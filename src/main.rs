use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use zlang_checker::config::{init_logging, CheckArgs, Config};
use zlang_checker::report::{
    check_input, JsonFormatter, OutputFormat, OutputFormatter, TableFormatter,
};
use zlang_checker::validation::analyze;

/// Exit status when no code was supplied
const EXIT_EMPTY_INPUT: u8 = 2;

fn main() -> Result<ExitCode> {
    let args = CheckArgs::parse();
    init_logging(args.log_level.as_deref(), "warn");

    let config = Config::from_check_args(&args)?;
    if let Some(source) = &config.source {
        log::info!("using config {}", source.display());
    }

    let text = read_source(&args)?;
    let text = match check_input(&text) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(EXIT_EMPTY_INPUT));
        }
    };

    let diagnostics = analyze(text);

    let formatter: Box<dyn OutputFormatter> = match config.format {
        OutputFormat::Table => Box::new(TableFormatter::new()),
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(config.geometry);
            Box::new(if config.pretty {
                formatter.pretty()
            } else {
                formatter
            })
        }
    };
    print!("{}", formatter.format(&diagnostics)?);
    if config.format == OutputFormat::Json {
        println!();
    }

    Ok(if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_source(args: &CheckArgs) -> Result<String> {
    match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
