//! JSON report

use serde::Serialize;

use crate::error::Result;
use crate::region::{AddressMap, Extraction};

use super::format::{ReportFormat, format_address};

/// Offsets in hex string format, `null` when not found
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct BackupJson {
    pub start: Option<String>,
    pub keys: Option<String>,
    pub s2lp: Option<String>,
    pub freespace: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SlicJson {
    pub keys: Option<String>,
    pub s2lp: Option<String>,
    pub freespace: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct StartJson {
    pub start: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ModuleJson {
    pub start: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonDocument {
    #[serde(rename = "ASUSBKP")]
    pub asusbkp: BackupJson,
    #[serde(rename = "SLIC")]
    pub slic: SlicJson,
    #[serde(rename = "ME")]
    pub me: StartJson,
    #[serde(rename = "GBE")]
    pub gbe: StartJson,
    #[serde(rename = "BSA", skip_serializing_if = "Vec::is_empty")]
    pub bsa: Vec<ModuleJson>,
    pub conditions: Vec<String>,
}

fn hex(address: Option<usize>) -> Option<String> {
    address.map(format_address)
}

impl JsonDocument {
    pub fn from_extraction(extraction: &Extraction) -> Self {
        let AddressMap {
            asusbkp,
            slic,
            me_start,
            gbe_start,
            bsa,
        } = &extraction.addresses;

        Self {
            asusbkp: BackupJson {
                start: hex(asusbkp.start),
                keys: hex(asusbkp.keys),
                s2lp: hex(asusbkp.s2lp),
                freespace: hex(asusbkp.freespace),
            },
            slic: SlicJson {
                keys: hex(slic.keys),
                s2lp: hex(slic.s2lp),
                freespace: hex(slic.freespace),
            },
            me: StartJson {
                start: hex(*me_start),
            },
            gbe: StartJson {
                start: hex(*gbe_start),
            },
            bsa: bsa
                .records()
                .iter()
                .map(|record| ModuleJson {
                    start: format_address(record.start),
                    data: format_address(record.data),
                })
                .collect(),
            conditions: extraction
                .conditions
                .iter()
                .map(|condition| condition.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport;

impl ReportFormat for JsonReport {
    fn render(&self, extraction: &Extraction) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&JsonDocument::from_extraction(extraction))?;
        json.push('\n');
        Ok(json)
    }
}
