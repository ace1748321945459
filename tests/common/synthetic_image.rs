//! Ruled scoresheet pages with block "glyphs" whose size encodes a value.
//!
//! A value `v` is drawn as a solid black block `GLYPH_H` pixels tall and
//! `4 + 2v` pixels wide, centred in its cell. Every block stays narrower and
//! shorter than the line-opening element, so it ends up in the content mask.
use emarque_grid::image::{GrayImageU8, ImageU8};

pub const PAGE_W: usize = 1000;
pub const PAGE_H: usize = 1400;
pub const GLYPH_H: usize = 12;
pub const LINE_W: usize = 3;

/// Column bounds shared by both tables: jersey, name, starter, play time,
/// then the seven stat columns.
pub const COLUMN_XS: [usize; 12] = [30, 90, 390, 450, 540, 600, 660, 720, 780, 840, 900, 960];
pub const ROW_PITCH: usize = 45;
pub const TOP_TABLE_Y: usize = 60;
pub const TOP_TABLE_LINES: usize = 9;
pub const BOTTOM_TABLE_Y: usize = 760;
pub const BOTTOM_TABLE_LINES: usize = 7;

pub fn glyph_width(value: usize) -> usize {
    4 + 2 * value
}

pub fn table_rows(y0: usize, lines: usize) -> Vec<usize> {
    (0..lines).map(|k| y0 + k * ROW_PITCH).collect()
}

pub struct Scoresheet {
    pub image: GrayImageU8,
}

impl Scoresheet {
    pub fn blank() -> Self {
        Self {
            image: GrayImageU8::filled(PAGE_W, PAGE_H, 255),
        }
    }

    /// Both tables with all their rulings, no cell content.
    pub fn ruled() -> Self {
        let mut sheet = Self::blank();
        for (y0, lines) in [
            (TOP_TABLE_Y, TOP_TABLE_LINES),
            (BOTTOM_TABLE_Y, BOTTOM_TABLE_LINES),
        ] {
            let ys = table_rows(y0, lines);
            let (top, bottom) = (ys[0], ys[ys.len() - 1]);
            let (left, right) = (COLUMN_XS[0], COLUMN_XS[COLUMN_XS.len() - 1]);
            for &y in &ys {
                sheet.fill(left - 1, y - 1, right - left + LINE_W, LINE_W, 0);
            }
            for &x in &COLUMN_XS {
                sheet.fill(x - 1, top - 1, LINE_W, bottom - top + LINE_W, 0);
            }
        }
        sheet
    }

    pub fn fill(&mut self, x0: usize, y0: usize, w: usize, h: usize, value: u8) {
        for y in y0..(y0 + h).min(self.image.height()) {
            for x in x0..(x0 + w).min(self.image.width()) {
                self.image.set(x, y, value);
            }
        }
    }

    /// Black `w`×`h` block centred in the cell of `column` in the row band
    /// starting at `row_y`.
    pub fn block(&mut self, column: usize, row_y: usize, w: usize, h: usize) {
        let cx = (COLUMN_XS[column] + COLUMN_XS[column + 1]) / 2;
        let cy = row_y + ROW_PITCH / 2;
        self.fill(cx - w / 2, cy - h / 2, w, h, 0);
    }

    /// Digit-style block for `value`; zero leaves the cell empty.
    pub fn value(&mut self, column: usize, row_y: usize, value: usize) {
        if value > 0 {
            self.block(column, row_y, glyph_width(value), GLYPH_H);
        }
    }

    pub fn view(&self) -> ImageU8<'_> {
        self.image.as_view()
    }
}
