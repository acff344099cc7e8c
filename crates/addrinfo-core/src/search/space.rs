//! Free space (padding run) search.

use super::window::SearchWindow;

/// Byte value used to pad unused flash regions
pub const SENTINEL: u8 = 0xFF;

/// Find the first run of at least `min_length` sentinel bytes in `window`.
///
/// The run start is rounded up to the next multiple of `alignment`, measured
/// on the absolute buffer offset. A start that is already aligned is
/// returned unchanged. Returns `None` for a zero `min_length`, an empty
/// window, or when the aligned start would land outside the window.
pub fn find_space(window: SearchWindow<'_>, min_length: usize, alignment: usize) -> Option<usize> {
    if min_length == 0 || window.is_empty() {
        return None;
    }

    let mut run = 0;
    for (pos, &byte) in window.bytes().iter().enumerate() {
        if byte == SENTINEL {
            run += 1;
        } else {
            run = 0;
        }

        if run == min_length {
            let start = window.start() + pos + 1 - min_length;
            let aligned = align_up(start, alignment)?;
            return (aligned < window.end()).then_some(aligned);
        }
    }

    None
}

/// Round `offset` up to a multiple of `alignment`; 0 and 1 mean unaligned.
pub fn align_up(offset: usize, alignment: usize) -> Option<usize> {
    if alignment <= 1 {
        return Some(offset);
    }

    match offset % alignment {
        0 => Some(offset),
        rem => offset.checked_add(alignment - rem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_with_run(len: usize, run_start: usize, run_len: usize) -> Vec<u8> {
        let mut buffer = vec![0u8; len];
        buffer[run_start..run_start + run_len].fill(SENTINEL);
        buffer
    }

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(13, 0), Some(13));
        assert_eq!(align_up(13, 1), Some(13));
        assert_eq!(align_up(13, 4), Some(16));
        assert_eq!(align_up(16, 4), Some(16));
        assert_eq!(align_up(17, 8), Some(24));
        assert_eq!(align_up(usize::MAX, 8), None);
    }

    #[test]
    fn test_exact_run_is_aligned() {
        let buffer = image_with_run(256, 21, 64);
        let found = find_space(SearchWindow::whole(&buffer), 64, 4).unwrap();
        assert_eq!(found, 24);
        assert_eq!(found % 4, 0);
    }

    #[test]
    fn test_aligned_start_is_unchanged() {
        let buffer = image_with_run(256, 32, 64);
        assert_eq!(find_space(SearchWindow::whole(&buffer), 64, 4), Some(32));
        assert_eq!(find_space(SearchWindow::whole(&buffer), 64, 8), Some(32));
    }

    #[test]
    fn test_no_alignment() {
        let buffer = image_with_run(128, 7, 16);
        assert_eq!(find_space(SearchWindow::whole(&buffer), 16, 1), Some(7));
        assert_eq!(find_space(SearchWindow::whole(&buffer), 16, 0), Some(7));
    }

    #[test]
    fn test_short_run_not_found() {
        let buffer = image_with_run(256, 10, 63);
        assert_eq!(find_space(SearchWindow::whole(&buffer), 64, 4), None);
    }

    #[test]
    fn test_broken_runs_reset_count() {
        let mut buffer = image_with_run(256, 0, 100);
        buffer[40] = 0x00;
        // 0..40 and 41..100 are both shorter than 64
        assert_eq!(find_space(SearchWindow::whole(&buffer), 64, 1), None);
        assert_eq!(find_space(SearchWindow::whole(&buffer), 50, 1), Some(41));
    }

    #[test]
    fn test_first_qualifying_run_wins() {
        let mut buffer = image_with_run(512, 20, 70);
        buffer[200..300].fill(SENTINEL);
        assert_eq!(find_space(SearchWindow::whole(&buffer), 64, 4), Some(20));
    }

    #[test]
    fn test_alignment_uses_absolute_offset() {
        let buffer = image_with_run(256, 50, 64);
        let window = SearchWindow::new(&buffer, 3..256).unwrap();
        assert_eq!(find_space(window, 64, 8), Some(56));
    }

    #[test]
    fn test_window_limits_run() {
        let buffer = image_with_run(256, 100, 64);
        let window = SearchWindow::new(&buffer, 0..150).unwrap();
        assert_eq!(find_space(window, 64, 1), None);
    }

    #[test]
    fn test_aligned_start_past_window_end() {
        // Run of 2 at 13..15 aligns to 16, which is outside a 15-byte window
        let buffer = image_with_run(15, 13, 2);
        assert_eq!(find_space(SearchWindow::whole(&buffer), 2, 8), None);
    }

    #[test]
    fn test_degenerate_inputs() {
        let buffer = image_with_run(64, 0, 64);
        assert_eq!(find_space(SearchWindow::whole(&buffer), 0, 4), None);
        let empty = SearchWindow::new(&buffer, 10..10).unwrap();
        assert_eq!(find_space(empty, 1, 1), None);
    }
}
