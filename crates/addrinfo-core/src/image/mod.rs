//! Firmware image loading

#[cfg(test)]
pub mod fixture;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::search::SearchWindow;

#[cfg(test)]
pub use fixture::ImageBuilder;

/// An immutable, fully loaded firmware image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Read the whole file into memory.
    ///
    /// The buffer is reserved up front so an oversized image reports
    /// `Error::Allocation` instead of aborting the process.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut bytes = reserve(file.metadata()?.len())?;
        file.read_to_end(&mut bytes)?;

        debug!("Loaded {} bytes from {}", bytes.len(), path.display());
        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn whole(&self) -> SearchWindow<'_> {
        SearchWindow::whole(&self.bytes)
    }

    pub fn window(&self, start: usize, end: usize) -> Result<SearchWindow<'_>> {
        SearchWindow::new(&self.bytes, start..end)
    }

    /// Window from `start` to the end of the image
    pub fn tail(&self, start: usize) -> Result<SearchWindow<'_>> {
        SearchWindow::from_offset(&self.bytes, start)
    }
}

/// Empty buffer able to hold `size` bytes without growing
fn reserve(size: u64) -> Result<Vec<u8>> {
    let capacity = usize::try_from(size).map_err(|_| Error::Allocation { size })?;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(capacity)
        .map_err(|_| Error::Allocation { size })?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_reads_whole_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        temp_file.write_all(&content).unwrap();
        temp_file.flush().unwrap();

        let image = Image::load(temp_file.path()).unwrap();
        assert_eq!(image.len(), 10_000);
        assert_eq!(image.bytes(), content.as_slice());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let image = Image::load(temp_file.path()).unwrap();
        assert!(image.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Image::load(dir.path().join("missing.bin")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reserve_exact_size() {
        let bytes = reserve(4096).unwrap();
        assert!(bytes.is_empty());
        assert!(bytes.capacity() >= 4096);
    }

    #[test]
    fn test_reserve_oversized_reports_allocation() {
        // Does not fit a usize on 32-bit targets and overflows capacity on 64-bit
        let err = reserve(u64::MAX).unwrap_err();
        assert!(matches!(err, Error::Allocation { size } if size == u64::MAX));
    }

    #[test]
    fn test_windows() {
        let image = Image::from_bytes(b"ASUSBKP$KEYS".to_vec());
        assert_eq!(image.whole().len(), 12);
        assert_eq!(image.tail(8).unwrap().find(b"KEYS"), Some(8));
        assert_eq!(image.window(0, 8).unwrap().find(b"KEYS"), None);
        assert!(image.tail(13).is_err());
    }
}
