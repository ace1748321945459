//! Foul-count reading (0–5) with a topological 0/4 check.
//!
//! Low-resolution "4" glyphs are frequently read as "0". A real "0" encloses
//! a background hole of meaningful area; a "4" usually does not (its
//! triangle closes up or stays open at scan resolution). When the vote says
//! 0 but the glyph has no hole, or only a tiny one, the value becomes 4.
//! A cell with no valid read votes 0 and goes through the same check, so an
//! empty foul box reads as 4.
use super::vote::majority;
use super::{parse_digits, Recognizer, Vocabulary};
use crate::binarize::threshold::otsu_binarize;
use crate::image::GrayImageU8;
use serde::Serialize;

pub const MAX_FOULS: u32 = 5;
/// Minimum hole area, relative to the cell, for a glyph to count as "0".
pub const MIN_ZERO_HOLE_RATIO: f32 = 0.06;

/// Background regions enclosed by glyph strokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct HoleStats {
    pub count: usize,
    /// Total hole area divided by the cell area.
    pub area_ratio: f32,
}

#[derive(Clone, Debug, Serialize)]
pub struct FoulReading {
    /// Valid (0–5) reads across all variants.
    pub reads: Vec<u32>,
    /// Majority of `reads`, 0 when there are none.
    pub vote: u32,
    pub holes: HoleStats,
    pub value: u32,
}

/// Read a foul cell from the content-only mask (glyph pixels high).
pub fn read_fouls<R: Recognizer + ?Sized>(cell: &GrayImageU8, recognizer: &R) -> FoulReading {
    if cell.is_empty() {
        return FoulReading {
            reads: Vec::new(),
            vote: 0,
            holes: HoleStats::default(),
            value: 0,
        };
    }
    let glyph_fg = otsu_binarize(cell, false);
    let glyph_bg = otsu_binarize(cell, true);
    let variants = [
        cell.clone(),
        glyph_fg.clone(),
        glyph_bg.clone(),
        glyph_fg.inverted(),
        glyph_bg.inverted(),
        glyph_bg.upscale_nearest(2),
        glyph_bg.upscale_nearest(3),
    ];
    let reads: Vec<u32> = variants
        .iter()
        .filter_map(|v| parse_digits(&recognizer.recognize(v, Vocabulary::FoulDigits)))
        .filter(|&v| v <= MAX_FOULS)
        .collect();
    let vote = majority(&reads).unwrap_or(0);
    let holes = hole_stats(&glyph_fg);
    FoulReading {
        value: disambiguate(vote, holes),
        reads,
        vote,
        holes,
    }
}

/// Final foul value from the vote and the glyph's hole statistics.
pub fn disambiguate(vote: u32, holes: HoleStats) -> u32 {
    match vote {
        0 if holes.count == 0 || holes.area_ratio < MIN_ZERO_HOLE_RATIO => 4,
        v => v.min(MAX_FOULS),
    }
}

/// Count 4-connected background components of `mask` that do not touch the
/// border (i.e. are enclosed by 8-connected foreground) and their area.
pub fn hole_stats(mask: &GrayImageU8) -> HoleStats {
    let (w, h) = (mask.width(), mask.height());
    if w == 0 || h == 0 {
        return HoleStats::default();
    }
    let mut visited = vec![false; w * h];
    let mut stack = Vec::new();
    let (mut count, mut area) = (0usize, 0usize);

    for start in 0..w * h {
        if visited[start] || mask.data()[start] != 0 {
            continue;
        }
        visited[start] = true;
        stack.push(start);
        let (mut size, mut touches_border) = (0usize, false);
        while let Some(i) = stack.pop() {
            size += 1;
            let (x, y) = (i % w, i / w);
            touches_border |= x == 0 || y == 0 || x + 1 == w || y + 1 == h;
            let neighbours = [
                (x > 0).then(|| i - 1),
                (x + 1 < w).then(|| i + 1),
                (y > 0).then(|| i - w),
                (y + 1 < h).then(|| i + w),
            ];
            for n in neighbours.into_iter().flatten() {
                if !visited[n] && mask.data()[n] == 0 {
                    visited[n] = true;
                    stack.push(n);
                }
            }
        }
        if !touches_border {
            count += 1;
            area += size;
        }
    }

    HoleStats {
        count,
        area_ratio: area as f32 / (w * h) as f32,
    }
}
