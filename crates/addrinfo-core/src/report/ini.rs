//! INI-style report, one `[SECTION]` per region group

use crate::error::Result;
use crate::region::Extraction;

use super::format::{ReportFormat, format_field};

#[derive(Debug, Clone, Copy, Default)]
pub struct IniReport;

impl ReportFormat for IniReport {
    fn render(&self, extraction: &Extraction) -> Result<String> {
        let sections = extraction
            .addresses
            .sections()
            .iter()
            .map(|section| {
                let mut block = format!("[{}]\n", section.name);
                for field in &section.fields {
                    block.push_str(&format!("{}={}\n", field.key, format_field(field.value)));
                }
                block
            })
            .collect::<Vec<_>>();

        Ok(sections.join("\n"))
    }
}
