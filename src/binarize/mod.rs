//! Page binarisation and ruling-line separation.
//!
//! 1. Adaptive Gaussian threshold, inverted so ink is foreground.
//! 2. Opening with a long vertical and a long horizontal line element; the
//!    union is the "lines" mask (table rulings, not glyphs).
//! 3. Content-only mask = binary mask with the lines removed.
//!
//! Line elements are `max(min_line_len, extent / line_len_divisor)` pixels
//! long, so they scale with the rendered page size.
pub mod morph;
pub mod threshold;

use self::morph::{open_with_line, LineAxis};
use self::threshold::adaptive_threshold_inv;
use crate::image::{GrayImageU8, ImageU8};
use log::debug;
use serde::{Deserialize, Serialize};

/// Tuning for [`binarize_page`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BinarizeOptions {
    /// Neighbourhood size of the adaptive threshold (odd).
    pub block_size: usize,
    /// Grey levels below the local mean required for foreground.
    pub c: f32,
    /// Lower bound on the line element length in pixels.
    pub min_line_len: usize,
    /// Line element length as a fraction `1 / divisor` of the page extent.
    pub line_len_divisor: usize,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self {
            block_size: 31,
            c: 9.0,
            min_line_len: 40,
            line_len_divisor: 36,
        }
    }
}

impl BinarizeOptions {
    fn line_len(&self, extent: usize) -> usize {
        self.min_line_len.max(extent / self.line_len_divisor.max(1))
    }
}

/// Masks derived from one page raster.
#[derive(Clone, Debug)]
pub struct BinarizedPage {
    pub binary: GrayImageU8,
    pub lines: GrayImageU8,
    pub content: GrayImageU8,
}

impl BinarizedPage {
    pub fn width(&self) -> usize {
        self.binary.width()
    }

    pub fn height(&self) -> usize {
        self.binary.height()
    }
}

pub fn binarize_page(gray: ImageU8<'_>, options: &BinarizeOptions) -> BinarizedPage {
    let binary = adaptive_threshold_inv(&gray, options.block_size, options.c);
    let vertical = open_with_line(&binary, options.line_len(gray.h), LineAxis::Vertical);
    let horizontal = open_with_line(&binary, options.line_len(gray.w), LineAxis::Horizontal);
    let lines = vertical.zip_map(&horizontal, |a, b| a | b);
    let content = binary.zip_map(&lines, |b, l| b & !l);
    debug!(
        "binarize_page {}x{}: foreground={} lines={} content={}",
        gray.w,
        gray.h,
        binary.count_nonzero(),
        lines.count_nonzero(),
        content.count_nonzero()
    );
    BinarizedPage {
        binary,
        lines,
        content,
    }
}
