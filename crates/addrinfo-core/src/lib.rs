//! # addrinfo-core
//!
//! Core library for locating regions inside ASUS BIOS firmware images.
//!
//! This crate provides:
//! - Byte signature search (Boyer-Moore-Horspool) and padding run location
//! - The compiled-in signature catalog
//! - Region extraction into named address records
//! - INI and JSON report rendering

pub mod catalog;
pub mod error;
pub mod image;
pub mod region;
pub mod report;
pub mod search;

pub use catalog::{ModuleLayout, Signature, SignatureCatalog, SpaceRequest};
pub use error::{Error, Result};
pub use image::Image;
pub use region::{
    Address, AddressMap, Condition, Extraction, ModuleChain, ModuleRecord, RegionExtractor,
    Section, SectionName,
};
pub use report::{IniReport, JsonReport, ReportFormat, format_address};
pub use search::{Horspool, SearchWindow, find, find_space};

