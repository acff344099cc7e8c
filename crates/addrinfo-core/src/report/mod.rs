//! Report rendering for extracted addresses

mod format;
mod ini;
mod json;

pub use format::*;
pub use ini::IniReport;
pub use json::{JsonDocument, JsonReport};
