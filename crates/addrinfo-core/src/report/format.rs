//! ReportFormat trait definition

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::region::{Address, Extraction};

/// Trait for report format implementations
///
/// Provides a common interface for the different renderings (INI, JSON) of
/// one extraction.
pub trait ReportFormat {
    /// Render the whole report
    fn render(&self, extraction: &Extraction) -> Result<String>;

    /// Render and write the report to `path`
    fn write_to(&self, extraction: &Extraction, path: &Path) -> Result<()> {
        let content = self.render(extraction)?;
        fs::write(path, content)?;
        debug!("Report written to {}", path.display());
        Ok(())
    }
}

/// Zero-padded, 8-digit uppercase hex with a `0x` prefix
pub fn format_address(address: usize) -> String {
    format!("0x{:08X}", address)
}

/// Address text, or `NOT_FOUND`
pub fn format_field(address: Address) -> String {
    match address {
        Some(value) => format_address(value),
        None => "NOT_FOUND".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(0), "0x00000000");
        assert_eq!(format_address(0x1000), "0x00001000");
        assert_eq!(format_address(0xDEADBEEF), "0xDEADBEEF");
        assert_eq!(format_address(0x1_0000_0000), "0x100000000");
    }

    #[test]
    fn test_format_field() {
        assert_eq!(format_field(Some(0xABC)), "0x00000ABC");
        assert_eq!(format_field(None), "NOT_FOUND");
    }
}
