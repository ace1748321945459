//! Morphological opening of binary masks with 1-pixel-thick line elements.
//!
//! For a `{0, 255}` mask, opening with a `1 × len` (or `len × 1`) rectangle
//! keeps exactly the foreground runs of at least `len` pixels along that axis.
//! The run-length form below is O(W·H) regardless of `len`.
use crate::image::{GrayImageU8, ImageView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineAxis {
    Horizontal,
    Vertical,
}

/// Opening with a line structuring element of length `len` along `axis`.
pub fn open_with_line(mask: &GrayImageU8, len: usize, axis: LineAxis) -> GrayImageU8 {
    let (w, h) = (mask.width(), mask.height());
    let mut out = GrayImageU8::filled(w, h, 0);
    let len = len.max(1);
    match axis {
        LineAxis::Horizontal => {
            for y in 0..h {
                let src = mask.row(y);
                let dst = out.row_mut(y);
                for (start, end) in runs(src.iter().copied()) {
                    if end - start >= len {
                        dst[start..end].fill(255);
                    }
                }
            }
        }
        LineAxis::Vertical => {
            for x in 0..w {
                let column = (0..h).map(|y| mask.get(x, y));
                for (start, end) in runs(column) {
                    if end - start >= len {
                        for y in start..end {
                            out.set(x, y, 255);
                        }
                    }
                }
            }
        }
    }
    out
}

/// Half-open `[start, end)` runs of non-zero values.
fn runs(values: impl Iterator<Item = u8>) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut start = None;
    let mut n = 0;
    for (i, v) in values.enumerate() {
        n = i + 1;
        match (v != 0, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                out.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, n));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_runs_are_removed() {
        let mut mask = GrayImageU8::filled(20, 3, 0);
        for x in 0..12 {
            mask.set(x, 1, 255);
        }
        for x in 15..18 {
            mask.set(x, 0, 255);
        }
        let opened = open_with_line(&mask, 10, LineAxis::Horizontal);
        assert_eq!(opened.count_nonzero(), 12);
        assert_eq!(opened.get(16, 0), 0);
        assert_eq!(opened.get(11, 1), 255);
    }

    #[test]
    fn vertical_opening_keeps_columns() {
        let mut mask = GrayImageU8::filled(4, 30, 0);
        for y in 0..30 {
            mask.set(2, y, 255);
        }
        mask.set(0, 5, 255);
        let opened = open_with_line(&mask, 25, LineAxis::Vertical);
        assert_eq!(opened.count_nonzero(), 30);
        assert_eq!(opened.get(0, 5), 0);
    }

    #[test]
    fn runs_touching_the_end_are_closed() {
        let r = runs([0u8, 255, 255, 0, 255].into_iter());
        assert_eq!(r, vec![(1, 3), (4, 5)]);
    }
}
