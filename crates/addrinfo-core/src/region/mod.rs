//! Region extraction: composes signature and free space searches into the
//! address records of one image.

mod extractor;
mod records;

use std::fmt;

pub use extractor::RegionExtractor;
pub use records::*;

/// A condition reported alongside the extracted addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The backup block has no free space, so its records were not searched
    BackupFreeSpaceMissing,
    /// More tagged modules exist than the chain can hold
    ModuleCapacityExceeded { capacity: usize },
}

impl Condition {
    /// Whether the run fails once the report is written
    pub fn is_fatal(&self) -> bool {
        matches!(self, Condition::BackupFreeSpaceMissing)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::BackupFreeSpaceMissing => {
                write!(f, "No space left in ASUSBKP to insert data")
            }
            Condition::ModuleCapacityExceeded { capacity } => {
                write!(f, "BSA module list truncated to {} entries", capacity)
            }
        }
    }
}

/// Result of one extraction pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub addresses: AddressMap,
    pub conditions: Vec<Condition>,
}

impl Extraction {
    pub fn has(&self, condition: Condition) -> bool {
        self.conditions.contains(&condition)
    }

    pub fn fatal_condition(&self) -> Option<Condition> {
        self.conditions.iter().copied().find(Condition::is_fatal)
    }
}
