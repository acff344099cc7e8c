//! Bounds-checked search windows over an image.

use std::ops::Range;

use crate::error::{Error, Result};

use super::matcher::Horspool;
use super::space;

/// A half-open `[start, end)` view into a byte buffer.
///
/// Every offset a window reports is relative to the start of the whole
/// buffer, never to the window itself.
#[derive(Debug, Clone, Copy)]
pub struct SearchWindow<'a> {
    buffer: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> SearchWindow<'a> {
    /// Window covering the whole buffer
    pub fn whole(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            start: 0,
            end: buffer.len(),
        }
    }

    pub fn new(buffer: &'a [u8], range: Range<usize>) -> Result<Self> {
        if range.start > range.end || range.end > buffer.len() {
            return Err(Error::InvalidWindow {
                start: range.start,
                end: range.end,
                len: buffer.len(),
            });
        }

        Ok(Self {
            buffer,
            start: range.start,
            end: range.end,
        })
    }

    /// Window from `start` to the end of the buffer
    pub fn from_offset(buffer: &'a [u8], start: usize) -> Result<Self> {
        Self::new(buffer, start..buffer.len())
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn bytes(&self) -> &'a [u8] {
        &self.buffer[self.start..self.end]
    }

    /// Leftmost occurrence of `needle` inside the window, as a buffer offset
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        self.find_with(&Horspool::new(needle))
    }

    pub fn find_with(&self, searcher: &Horspool<'_>) -> Option<usize> {
        searcher.find_in(self.bytes()).map(|pos| self.start + pos)
    }

    /// Aligned start of the first sentinel run of at least `min_length` bytes
    pub fn find_space(&self, min_length: usize, alignment: usize) -> Option<usize> {
        space::find_space(*self, min_length, alignment)
    }
}
