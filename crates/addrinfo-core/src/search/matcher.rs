//! Boyer-Moore-Horspool substring search over raw bytes.

/// A needle with its precomputed bad-character skip table.
///
/// Building the table once pays off when the same signature is searched
/// repeatedly, as the module chain traversal does.
#[derive(Debug, Clone)]
pub struct Horspool<'n> {
    needle: &'n [u8],
    skip: [usize; 256],
}

impl<'n> Horspool<'n> {
    pub fn new(needle: &'n [u8]) -> Self {
        let len = needle.len();
        let mut skip = [len; 256];

        if len > 0 {
            let last = len - 1;
            for (i, &byte) in needle[..last].iter().enumerate() {
                skip[byte as usize] = last - i;
            }
        }

        Self { needle, skip }
    }

    /// Offset of the leftmost occurrence of the needle in `haystack`.
    ///
    /// An empty needle never matches.
    pub fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        let len = self.needle.len();
        if len == 0 || haystack.len() < len {
            return None;
        }

        let last = len - 1;
        let mut pos = 0;

        while pos <= haystack.len() - len {
            let mut j = last;
            while haystack[pos + j] == self.needle[j] {
                if j == 0 {
                    return Some(pos);
                }
                j -= 1;
            }

            pos += self.skip[haystack[pos + last] as usize];
        }

        None
    }
}

/// Find the leftmost exact occurrence of `needle` in `haystack`.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    Horspool::new(needle).find_in(haystack)
}
