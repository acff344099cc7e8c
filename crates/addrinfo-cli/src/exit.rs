//! Failure classification and process exit codes.

use std::fmt;
use std::process::ExitCode;

use addrinfo_core::Error;

/// Failure classes, each with its own exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Usage,
    InputFile,
    OutputFile,
    Memory,
    NoAnchor,
    NoFreeSpace,
}

impl FailureKind {
    pub fn code(self) -> u8 {
        match self {
            FailureKind::Usage => 1,
            FailureKind::InputFile => 2,
            FailureKind::OutputFile => 3,
            FailureKind::Memory => 4,
            FailureKind::NoAnchor => 5,
            FailureKind::NoFreeSpace => 6,
        }
    }

    /// Classify a core error raised while loading or scanning the input
    pub fn of_input(error: &Error) -> Self {
        match error {
            Error::Allocation { .. } => FailureKind::Memory,
            Error::AnchorNotFound { .. } => FailureKind::NoAnchor,
            _ => FailureKind::InputFile,
        }
    }
}

impl From<FailureKind> for ExitCode {
    fn from(kind: FailureKind) -> Self {
        ExitCode::from(kind.code())
    }
}

/// A fatal error with its class
#[derive(Debug)]
pub struct Failure {
    pub kind: FailureKind,
    pub error: anyhow::Error,
}

impl Failure {
    pub fn new(kind: FailureKind, error: impl Into<anyhow::Error>) -> Self {
        Self {
            kind,
            error: error.into(),
        }
    }

    pub fn input(error: Error) -> Self {
        Self::new(FailureKind::of_input(&error), error)
    }

    pub fn output(error: Error) -> Self {
        Self::new(FailureKind::OutputFile, error)
    }

    pub fn context<C>(self, context: C) -> Self
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        Self {
            kind: self.kind,
            error: self.error.context(context),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let kinds = [
            FailureKind::Usage,
            FailureKind::InputFile,
            FailureKind::OutputFile,
            FailureKind::Memory,
            FailureKind::NoAnchor,
            FailureKind::NoFreeSpace,
        ];
        let mut codes: Vec<u8> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
        assert!(!codes.contains(&0));
    }

    #[test]
    fn test_classify_input_errors() {
        assert_eq!(
            FailureKind::of_input(&Error::Allocation { size: 1 }),
            FailureKind::Memory
        );
        assert_eq!(
            FailureKind::of_input(&Error::AnchorNotFound { signature: "ASUSBKP" }),
            FailureKind::NoAnchor
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(FailureKind::of_input(&Error::Io(io)), FailureKind::InputFile);
    }

    #[test]
    fn test_failure_display_is_single_line() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let failure = Failure::input(Error::Io(io)).context("Can't open input file");
        assert_eq!(failure.kind, FailureKind::InputFile);
        assert_eq!(failure.to_string(), "Can't open input file: IO error: missing");
    }
}
