//! Region extraction pipeline
//!
//! # Search Strategy
//!
//! The backup block (`ASUSBKP$`) is the anchor of the run. Everything else is
//! located independently over the whole image, so a missing optional region
//! only ever yields a NOT_FOUND field.
//!
//! ```text
//!  image
//!  ┌──────────────────────────────────────────────────────────────┐
//!  │ ... ASUSBKP$ [S2LP] [KEYS] ... FF FF FF (>=64) ...            │
//!  │     └──────── sub-window ───────┘                             │
//!  │ ... ME header ... MAC(-12) GbE header ...                     │
//!  │ ... MSOA [SLIC S2LP] [SLIC KEYS] ... FF (>=3096) ... ──► end  │
//!  │ ... FD44 hdr ... FD44 hdr(BSA_) ... FD44 hdr(BSA_) ...         │
//!  └──────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, trace, warn};

use crate::catalog::{Signature, SignatureCatalog, SpaceRequest};
use crate::error::{Error, Result};
use crate::image::Image;
use crate::search::{Horspool, SearchWindow};

use super::records::{AddressMap, BackupAddresses, ModuleChain, ModuleRecord, SlicAddresses};
use super::{Condition, Extraction};

pub struct RegionExtractor<'a> {
    catalog: &'a SignatureCatalog,
}

impl<'a> RegionExtractor<'a> {
    pub fn new(catalog: &'a SignatureCatalog) -> Self {
        Self { catalog }
    }

    /// Locate every catalog region in `image`.
    ///
    /// Fails only when the backup anchor is missing. A missing backup free
    /// space skips the backup sub-records and is reported as a condition;
    /// the remaining regions are still searched.
    pub fn extract(&self, image: &Image) -> Result<Extraction> {
        debug!("Starting region extraction over {} bytes", image.len());
        for signature in self.catalog.signatures() {
            trace!("Catalog signature {}", signature);
        }
        let mut conditions = Vec::new();
        let mut addresses = AddressMap::new(self.catalog.module.capacity);

        // Phase 1: backup block (anchor)
        debug!("Phase 1: Searching backup block...");
        let backup_start = image.whole().find(self.catalog.backup.bytes).ok_or(
            Error::AnchorNotFound {
                signature: self.catalog.backup.name,
            },
        )?;
        debug!("  {}: 0x{:X}", self.catalog.backup.name, backup_start);

        // Phase 2: backup sub-records, bounded by the first free space
        debug!("Phase 2: Searching backup records...");
        match self.search_backup(image, backup_start)? {
            Some(backup) => addresses.asusbkp = backup,
            None => {
                debug!("No free space in backup block, skipping its records");
                addresses.asusbkp.start = Some(backup_start);
                conditions.push(Condition::BackupFreeSpaceMissing);
            }
        }

        // Phase 3: ME / GbE
        debug!("Phase 3: Searching ME and GbE headers...");
        addresses.me_start = self.locate(image.whole(), &self.catalog.me);
        addresses.gbe_start = self.search_gbe(image);

        // Phase 4: MSOA licensing module
        debug!("Phase 4: Searching licensing module...");
        addresses.slic = self.search_slic(image)?;

        // Phase 5: module chain
        debug!("Phase 5: Traversing module chain...");
        addresses.bsa = self.search_modules(image);
        if addresses.bsa.is_truncated() {
            conditions.push(Condition::ModuleCapacityExceeded {
                capacity: addresses.bsa.capacity(),
            });
        }

        debug!(
            "Located {} addresses, {} BSA modules",
            addresses.found_count(),
            addresses.bsa.len()
        );

        Ok(Extraction {
            addresses,
            conditions,
        })
    }

    /// Returns `None` when the block has no free space to bound the search
    fn search_backup(&self, image: &Image, start: usize) -> Result<Option<BackupAddresses>> {
        let Some(freespace) = self.locate_space(image.tail(start)?, self.catalog.backup_free_space)
        else {
            return Ok(None);
        };
        debug!("  {} free space: 0x{:X}", self.catalog.backup.name, freespace);

        let records = image.window(start, freespace)?;

        Ok(Some(BackupAddresses {
            start: Some(start),
            keys: self.locate(records, &self.catalog.backup_keys),
            s2lp: self.locate(records, &self.catalog.backup_s2lp),
            freespace: Some(freespace),
        }))
    }

    fn search_gbe(&self, image: &Image) -> Option<usize> {
        let found = self.locate(image.whole(), &self.catalog.gbe)?;
        let adjusted = found.checked_add_signed(self.catalog.gbe_adjust);
        if adjusted.is_none() {
            debug!(
                "  {} at 0x{:X} is too close to the image start for its field",
                self.catalog.gbe.name, found
            );
        }
        adjusted.filter(|&offset| offset < image.len())
    }

    fn search_slic(&self, image: &Image) -> Result<SlicAddresses> {
        let Some(msoa) = self.locate(image.whole(), &self.catalog.msoa) else {
            return Ok(SlicAddresses::default());
        };

        let module = image.tail(msoa)?;
        Ok(SlicAddresses {
            keys: self.locate(module, &self.catalog.slic_keys),
            s2lp: self.locate(module, &self.catalog.slic_s2lp),
            freespace: self.locate_space(module, self.catalog.slic_free_space),
        })
    }

    /// Walk every module header, keeping those tagged as BSA.
    ///
    /// Stops early once the chain is full and another tagged header shows up.
    fn search_modules(&self, image: &Image) -> ModuleChain {
        let layout = &self.catalog.module;
        let mut chain = ModuleChain::with_capacity(layout.capacity);
        let searcher = Horspool::new(layout.header.bytes);
        let bytes = image.bytes();

        let mut cursor = 0;
        while let Some(start) = SearchWindow::from_offset(bytes, cursor)
            .ok()
            .and_then(|window| window.find_with(&searcher))
        {
            if layout.has_tag(bytes, start) {
                let record = ModuleRecord {
                    start,
                    data: start + layout.header_length,
                };
                if chain.push(record).is_err() {
                    warn!(
                        "More than {} {} modules found, ignoring the rest (first ignored at 0x{:X})",
                        layout.capacity, layout.tag.name, start
                    );
                    break;
                }
                debug!("  {} module: 0x{:X}", layout.tag.name, start);
            } else {
                debug!("  Skipping untagged {} header at 0x{:X}", layout.header.name, start);
            }

            cursor = start.saturating_add(layout.header_length);
        }

        chain
    }

    fn locate(&self, window: SearchWindow<'_>, signature: &Signature) -> Option<usize> {
        let found = window.find(signature.bytes);
        match found {
            Some(offset) => debug!("  {}: 0x{:X}", signature.name, offset),
            None => debug!("  {}: not found", signature.name),
        }
        found
    }

    fn locate_space(&self, window: SearchWindow<'_>, request: SpaceRequest) -> Option<usize> {
        window.find_space(request.min_length, request.alignment)
    }
}
