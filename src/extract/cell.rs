use crate::image::GrayImageU8;
use serde::{Deserialize, Serialize};

/// Pixels removed from each side of a grid cell before recognition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellPadding {
    pub x: usize,
    pub y: usize,
}

impl Default for CellPadding {
    fn default() -> Self {
        Self { x: 6, y: 3 }
    }
}

/// Both recognition variants of one cell.
#[derive(Clone, Debug)]
pub struct Cell {
    /// Content-mask slice, glyphs high.
    pub raw: GrayImageU8,
    /// Photometric inverse of `raw`: dark glyphs on white.
    pub text: GrayImageU8,
}

/// Cut the cell `[left, right) × [top, bottom)` out of the content mask.
///
/// The rectangle is shrunk by `padding`, then by one more pixel on each side
/// when it is still larger than 4×4. Returns `None` when nothing is left.
pub fn extract_cell(
    content: &GrayImageU8,
    (left, right): (usize, usize),
    (top, bottom): (usize, usize),
    padding: CellPadding,
) -> Option<Cell> {
    let (x0, x1) = (left + padding.x, right.saturating_sub(padding.x));
    let (y0, y1) = (top + padding.y, bottom.saturating_sub(padding.y));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    let mut raw = content.crop(x0, y0, x1, y1);
    if raw.is_empty() {
        return None;
    }
    if raw.width() > 4 && raw.height() > 4 {
        raw = raw.crop(1, 1, raw.width() - 1, raw.height() - 1);
    }
    let text = raw.inverted();
    Some(Cell { raw, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_and_trim_shrink_the_cell() {
        let content = GrayImageU8::filled(100, 50, 0);
        let cell = extract_cell(&content, (10, 40), (5, 25), CellPadding::default()).unwrap();
        // 30 - 12 - 2 by 20 - 6 - 2
        assert_eq!((cell.raw.width(), cell.raw.height()), (16, 12));
        assert!(cell.text.data().iter().all(|&v| v == 255));
    }

    #[test]
    fn small_cells_are_not_trimmed() {
        let content = GrayImageU8::filled(100, 50, 0);
        let cell = extract_cell(&content, (0, 16), (0, 9), CellPadding::default()).unwrap();
        assert_eq!((cell.raw.width(), cell.raw.height()), (4, 3));
    }

    #[test]
    fn collapsed_cells_are_skipped() {
        let content = GrayImageU8::filled(100, 50, 0);
        assert!(extract_cell(&content, (10, 22), (0, 20), CellPadding::default()).is_none());
        assert!(extract_cell(&content, (10, 40), (0, 6), CellPadding::default()).is_none());
        assert!(extract_cell(&content, (120, 160), (0, 20), CellPadding::default()).is_none());
    }
}
