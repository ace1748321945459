//! Recognizer that decodes the block glyphs drawn by `synthetic_image`.
use super::synthetic_image::GLYPH_H;
use emarque_grid::image::GrayImageU8;
use emarque_grid::{Recognizer, Vocabulary};
use std::cell::Cell;

/// Name cells are the only cells wider than this.
pub const NAME_CELL_MIN_WIDTH: usize = 200;
/// Block heights that mark layout rows in name cells.
pub const HALF_TIME_H: usize = 20;
pub const HEADER_H: usize = 28;

pub struct GlyphReader {
    names: Vec<&'static str>,
    calls: Cell<usize>,
}

impl GlyphReader {
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// Bounding box `(w, h)` of the minority pixel class, `None` when uniform.
pub fn ink_box(patch: &GrayImageU8) -> Option<(usize, usize)> {
    let data = patch.data();
    let lo = *data.iter().min()?;
    let hi = *data.iter().max()?;
    if lo == hi {
        return None;
    }
    let mid = (u16::from(lo) + u16::from(hi)) / 2;
    let high = data.iter().filter(|&&v| u16::from(v) > mid).count();
    let ink_is_high = high * 2 <= data.len();

    let (mut x0, mut y0, mut x1, mut y1) = (usize::MAX, usize::MAX, 0, 0);
    for y in 0..patch.height() {
        for x in 0..patch.width() {
            if (u16::from(patch.get(x, y)) > mid) == ink_is_high {
                x0 = x0.min(x);
                y0 = y0.min(y);
                x1 = x1.max(x);
                y1 = y1.max(y);
            }
        }
    }
    Some((x1 - x0 + 1, y1 - y0 + 1))
}

impl Recognizer for GlyphReader {
    fn recognize(&self, patch: &GrayImageU8, vocabulary: Vocabulary) -> String {
        self.calls.set(self.calls.get() + 1);
        let Some((w, h)) = ink_box(patch) else {
            return String::new();
        };
        match vocabulary {
            Vocabulary::Text if patch.width() > NAME_CELL_MIN_WIDTH => match h {
                GLYPH_H => self
                    .names
                    .get(w.saturating_sub(4) / 2)
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                HALF_TIME_H => "MI-TEMPS".to_string(),
                HEADER_H => "Nom Prénom".to_string(),
                _ => String::new(),
            },
            Vocabulary::Text => "X".to_string(),
            Vocabulary::Clock => "1234".to_string(),
            Vocabulary::Digits | Vocabulary::FoulDigits => {
                if h % GLYPH_H != 0 {
                    return String::new();
                }
                let ratio = w * GLYPH_H / h;
                if ratio < 4 || (ratio - 4) % 2 != 0 {
                    return String::new();
                }
                ((ratio - 4) / 2).to_string()
            }
        }
    }
}
