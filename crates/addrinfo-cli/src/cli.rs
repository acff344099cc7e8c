//! Command line arguments.

use std::path::PathBuf;

use addrinfo_core::{IniReport, JsonReport, ReportFormat};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "addrinfo")]
#[command(version)]
#[command(
    about = "Finds addresses of different BIOS structures of ASUS BIOS files and stores them to an INI-formatted file"
)]
pub struct Args {
    /// BIOS image to analyze
    pub input: PathBuf,

    /// Report file to create
    pub output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportKind::Ini, env = "ADDRINFO_FORMAT")]
    pub format: ReportKind,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Ini,
    Json,
}

impl ReportKind {
    pub fn formatter(self) -> Box<dyn ReportFormat> {
        match self {
            ReportKind::Ini => Box::new(IniReport),
            ReportKind::Json => Box::new(JsonReport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from(["addrinfo", "bios.rom", "out.ini"]).unwrap();
        assert_eq!(args.input, PathBuf::from("bios.rom"));
        assert_eq!(args.output, PathBuf::from("out.ini"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_format_flag() {
        let args =
            Args::try_parse_from(["addrinfo", "bios.rom", "out.json", "--format", "json", "-v"])
                .unwrap();
        assert_eq!(args.format, ReportKind::Json);
        assert!(args.verbose);
    }

    #[test]
    fn test_missing_output_is_usage_error() {
        let err = Args::try_parse_from(["addrinfo", "bios.rom"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Args::try_parse_from(["addrinfo", "a", "b", "--format", "xml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
