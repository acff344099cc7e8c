use std::borrow::Cow;

use strum::{Display, EnumIter, IntoStaticStr};

/// Absolute image offset, or `None` when the region was not found
pub type Address = Option<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SectionName {
    Asusbkp,
    Slic,
    Me,
    Gbe,
    Bsa,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackupAddresses {
    pub start: Address,
    pub keys: Address,
    pub s2lp: Address,
    pub freespace: Address,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlicAddresses {
    pub keys: Address,
    pub s2lp: Address,
    pub freespace: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRecord {
    /// Offset of the module header
    pub start: usize,
    /// Offset of the payload following the header
    pub data: usize,
}

/// Ordered module records with a fixed capacity.
///
/// Pushing into a full chain is refused and marks it truncated; the chain
/// never grows past its capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleChain {
    records: Vec<ModuleRecord>,
    capacity: usize,
    truncated: bool,
}

impl ModuleChain {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
            truncated: false,
        }
    }

    /// Append a record, handing it back when the chain is full
    pub fn push(&mut self, record: ModuleRecord) -> Result<(), ModuleRecord> {
        if self.is_full() {
            self.truncated = true;
            return Err(record);
        }

        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[ModuleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Whether a record was refused because the chain was full
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// A named offset-or-not-found fact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: Cow<'static, str>,
    pub value: Address,
}

impl Field {
    fn fixed(key: &'static str, value: Address) -> Self {
        Self {
            key: Cow::Borrowed(key),
            value,
        }
    }

    fn indexed(prefix: &str, index: usize, value: usize) -> Self {
        Self {
            key: Cow::Owned(format!("{}{}", prefix, index)),
            value: Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: SectionName,
    pub fields: Vec<Field>,
}

/// Every address located in one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressMap {
    pub asusbkp: BackupAddresses,
    pub slic: SlicAddresses,
    pub me_start: Address,
    pub gbe_start: Address,
    pub bsa: ModuleChain,
}

impl AddressMap {
    pub fn new(module_capacity: usize) -> Self {
        Self {
            asusbkp: BackupAddresses::default(),
            slic: SlicAddresses::default(),
            me_start: None,
            gbe_start: None,
            bsa: ModuleChain::with_capacity(module_capacity),
        }
    }

    /// Sections in report order. BSA is present only when it has records.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![
            Section {
                name: SectionName::Asusbkp,
                fields: vec![
                    Field::fixed("START", self.asusbkp.start),
                    Field::fixed("KEYS", self.asusbkp.keys),
                    Field::fixed("S2LP", self.asusbkp.s2lp),
                    Field::fixed("FREESPACE", self.asusbkp.freespace),
                ],
            },
            Section {
                name: SectionName::Slic,
                fields: vec![
                    Field::fixed("KEYS", self.slic.keys),
                    Field::fixed("S2LP", self.slic.s2lp),
                    Field::fixed("FREESPACE", self.slic.freespace),
                ],
            },
            Section {
                name: SectionName::Me,
                fields: vec![Field::fixed("START", self.me_start)],
            },
            Section {
                name: SectionName::Gbe,
                fields: vec![Field::fixed("START", self.gbe_start)],
            },
        ];

        if !self.bsa.is_empty() {
            let fields = self
                .bsa
                .records()
                .iter()
                .enumerate()
                .flat_map(|(i, record)| {
                    [
                        Field::indexed("START", i, record.start),
                        Field::indexed("DATA", i, record.data),
                    ]
                })
                .collect();

            sections.push(Section {
                name: SectionName::Bsa,
                fields,
            });
        }

        sections
    }

    /// Number of fields holding an offset
    pub fn found_count(&self) -> usize {
        self.sections()
            .iter()
            .flat_map(|section| &section.fields)
            .filter(|field| field.value.is_some())
            .count()
    }
}
