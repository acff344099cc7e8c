//! Console summary of an extraction.

use std::path::Path;

use addrinfo_core::{Extraction, report::format_field};
use owo_colors::OwoColorize;

/// One `SECTION.KEY = value` line per field, in report order
pub fn field_lines(extraction: &Extraction) -> Vec<String> {
    extraction
        .addresses
        .sections()
        .iter()
        .flat_map(|section| {
            section.fields.iter().map(move |field| {
                format!(
                    "{}.{} = {}",
                    section.name,
                    field.key,
                    format_field(field.value)
                )
            })
        })
        .collect()
}

/// Summary lines for a successful run.
///
/// Fatal conditions are left out; the caller reports those as the failure.
pub fn lines(extraction: &Extraction, output: &Path, verbose: bool) -> Vec<String> {
    let addresses = &extraction.addresses;
    let mut lines = Vec::new();

    if verbose {
        lines.extend(
            field_lines(extraction)
                .into_iter()
                .map(|line| format!("{} {}", "[*]".blue(), line)),
        );
    }

    for condition in extraction.conditions.iter().filter(|c| !c.is_fatal()) {
        lines.push(format!("{} {}", "[!]".yellow(), condition));
    }

    lines.push(format!(
        "{} Found {} addresses, {} BSA modules",
        "[+]".green(),
        addresses.found_count(),
        addresses.bsa.len()
    ));
    lines.push(format!("{} Report saved to: {}", "[+]".green(), output.display()));
    lines
}
