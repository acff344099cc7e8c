//! Compiled-in signature catalog
//!
//! The catalog is an immutable value handed to the extractor. It is not
//! configurable at run time; `SignatureCatalog::builtin()` is the only
//! production source.

pub mod layout;
mod signature;

pub use signature::*;

/// A minimum-length padding run and the boundary its start is aligned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceRequest {
    pub min_length: usize,
    pub alignment: usize,
}

/// Structure of the repeated FD44 module headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleLayout {
    pub header: Signature,
    pub tag: Signature,
    pub tag_offset: usize,
    pub header_length: usize,
    pub capacity: usize,
}

impl ModuleLayout {
    /// Whether the header at `start` carries the expected tag.
    ///
    /// A header too close to the end of the buffer to hold the tag never
    /// matches.
    pub fn has_tag(&self, buffer: &[u8], start: usize) -> bool {
        start
            .checked_add(self.tag_offset)
            .and_then(|tag_start| buffer.get(tag_start..))
            .is_some_and(|rest| self.tag.matches_at(rest))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureCatalog {
    pub backup: Signature,
    pub backup_s2lp: Signature,
    pub backup_keys: Signature,
    pub backup_free_space: SpaceRequest,

    pub me: Signature,

    pub gbe: Signature,
    /// Signed distance from the GbE signature to the reported field
    pub gbe_adjust: isize,

    pub msoa: Signature,
    pub slic_s2lp: Signature,
    pub slic_keys: Signature,
    pub slic_free_space: SpaceRequest,

    pub module: ModuleLayout,
}

impl SignatureCatalog {
    pub fn builtin() -> Self {
        Self {
            backup: Signature::new("ASUSBKP", layout::backup::HEADER),
            backup_s2lp: Signature::new("ASUSBKP.S2LP", layout::backup::S2LP_HEADER),
            backup_keys: Signature::new("ASUSBKP.KEYS", layout::backup::KEYS_HEADER),
            backup_free_space: SpaceRequest {
                min_length: layout::backup::FREE_SPACE_LENGTH,
                alignment: layout::backup::FREE_SPACE_ALIGNMENT,
            },
            me: Signature::new("ME", layout::me::HEADER),
            gbe: Signature::new("GBE", layout::gbe::HEADER),
            gbe_adjust: layout::gbe::MAC_OFFSET,
            msoa: Signature::new("MSOA", layout::slic::MSOA_HEADER),
            slic_s2lp: Signature::new("SLIC.S2LP", layout::slic::S2LP_HEADER),
            slic_keys: Signature::new("SLIC.KEYS", layout::slic::KEYS_HEADER),
            slic_free_space: SpaceRequest {
                min_length: layout::slic::FREE_SPACE_LENGTH,
                alignment: layout::slic::FREE_SPACE_ALIGNMENT,
            },
            module: ModuleLayout {
                header: Signature::new("FD44", layout::module::HEADER),
                tag: Signature::new("BSA", layout::module::BSA_TAG),
                tag_offset: layout::module::TAG_OFFSET,
                header_length: layout::module::HEADER_LENGTH,
                capacity: layout::module::MAX_MODULES,
            },
        }
    }

    pub fn signatures(&self) -> [&Signature; 9] {
        [
            &self.backup,
            &self.backup_s2lp,
            &self.backup_keys,
            &self.me,
            &self.gbe,
            &self.msoa,
            &self.slic_s2lp,
            &self.slic_keys,
            &self.module.header,
        ]
    }
}

impl Default for SignatureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
