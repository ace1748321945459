#![doc = include_str!("../README.md")]

// Pipeline stages, leaves first.
pub mod binarize;
pub mod columns;
pub mod extract;
pub mod grid;
pub mod ocr;
pub mod roster;
pub mod stats;

// Driver, collaborators and surfaces.
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extractor;
pub mod image;
pub mod rasterize;
pub mod response;
pub mod text;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Result, RosterError};
pub use crate::extractor::{ExtractionReport, RosterExtractor, RosterParams};
pub use crate::ocr::{Recognizer, TesseractCli, Vocabulary};
pub use crate::rasterize::{PageRasterizer, Pdftoppm};
pub use crate::roster::{PlayerRow, TeamRoster};
pub use crate::types::{FieldKey, PageHalf};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use emarque_grid::prelude::*;
///
/// # fn main() -> emarque_grid::Result<()> {
/// let (w, h) = (1000usize, 1400usize);
/// let gray = vec![255u8; w * h];
/// let page = ImageU8 { w, h, stride: w, data: &gray };
///
/// let extractor = RosterExtractor::new(RosterParams::default(), TesseractCli::default())?;
/// let [home, away] = extractor.process(page);
/// println!("{}: {} players, {}: {} players", home.name, home.len(), away.name, away.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::{
        PlayerRow, Recognizer, RosterExtractor, RosterParams, TeamRoster, TesseractCli, Vocabulary,
    };
}
