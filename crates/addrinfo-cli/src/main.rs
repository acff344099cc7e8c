use std::process::ExitCode;

use addrinfo_core::{Extraction, Image, RegionExtractor, SignatureCatalog};
use anyhow::{Result, anyhow};
use clap::Parser;
use clap::error::ErrorKind;
use owo_colors::OwoColorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod exit;
mod summary;

use cli::Args;
use exit::{Failure, FailureKind};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => FailureKind::Usage.into(),
            };
        }
    };

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("{} Failed to initialize logging: {:#}", "[!]".red(), e);
    }

    let outcome = run(&args);
    for line in diagnostics(&outcome, &args) {
        eprintln!("{}", line);
    }

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(failure) => failure.kind.into(),
    }
}

/// Lines printed to stderr once the run is over
fn diagnostics(outcome: &std::result::Result<Extraction, Failure>, args: &Args) -> Vec<String> {
    match outcome {
        Ok(extraction) => summary::lines(extraction, &args.output, args.verbose),
        Err(failure) => vec![format!("{} {}", "[!]".red(), failure)],
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("addrinfo={}", level).parse()?),
        )
        .try_init()
        .map_err(|e| anyhow!("{}", e))?;
    Ok(())
}

fn run(args: &Args) -> std::result::Result<Extraction, Failure> {
    info!("AddrInfo {} starting...", env!("CARGO_PKG_VERSION"));

    let image = Image::load(&args.input).map_err(|e| {
        let action = if e.is_not_found() { "open" } else { "read" };
        Failure::input(e).context(format!(
            "Can't {} input file {}",
            action,
            args.input.display()
        ))
    })?;
    debug!("Loaded image: {} bytes", image.len());

    let catalog = SignatureCatalog::builtin();
    let extraction = RegionExtractor::new(&catalog)
        .extract(&image)
        .map_err(Failure::input)?;

    args.format
        .formatter()
        .write_to(&extraction, &args.output)
        .map_err(|e| {
            Failure::output(e).context(format!("Can't write output file {}", args.output.display()))
        })?;

    // The partial report is kept, but the run still fails
    if let Some(condition) = extraction.fatal_condition() {
        return Err(Failure::new(FailureKind::NoFreeSpace, anyhow!("{}", condition)));
    }

    Ok(extraction)
}
