//! Synthetic image builder for tests

use super::Image;

/// Builds an image by placing byte strings at fixed offsets over a filler.
pub struct ImageBuilder {
    bytes: Vec<u8>,
}

impl ImageBuilder {
    /// Image of `len` zero bytes
    pub fn new(len: usize) -> Self {
        Self::filled(len, 0x00)
    }

    pub fn filled(len: usize, filler: u8) -> Self {
        Self {
            bytes: vec![filler; len],
        }
    }

    /// Write `data` at `offset`. Panics when it does not fit.
    pub fn place(mut self, offset: usize, data: &[u8]) -> Self {
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
        self
    }

    /// Fill `len` bytes at `offset` with `value`
    pub fn fill(mut self, offset: usize, len: usize, value: u8) -> Self {
        self.bytes[offset..offset + len].fill(value);
        self
    }

    pub fn build(self) -> Image {
        Image::from_bytes(self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_places_data() {
        let image = ImageBuilder::new(16)
            .place(2, b"AB")
            .fill(8, 4, 0xFF)
            .build();

        assert_eq!(image.len(), 16);
        assert_eq!(&image.bytes()[2..4], b"AB");
        assert_eq!(&image.bytes()[8..12], &[0xFF; 4]);
        assert_eq!(image.bytes()[12], 0);
    }
}
