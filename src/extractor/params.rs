//! Knobs of one extraction run.
//!
//! Defaults reproduce the settings the scoresheet service runs with: pages
//! rendered at 7× (504 dpi), peaks above 18% of the profile maximum, and
//! columns taken in template order.
use crate::binarize::BinarizeOptions;
use crate::error::{Result, RosterError};
use crate::extract::CellPadding;
use crate::grid::GridOptions;
use crate::roster::FilterPolicy;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const SCALE_RANGE: RangeInclusive<u32> = 2..=10;
pub const PEAK_FRAC_RANGE: RangeInclusive<f32> = 0.05..=0.5;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterParams {
    /// Render scale relative to 72 dpi.
    pub scale: u32,
    /// Profile peak threshold as a fraction of the maximum.
    pub peak_frac: f32,
    /// Take columns in template order instead of reading the header row.
    pub force_order: bool,
    /// Render the grid overlay into the report.
    pub debug: bool,
    /// Hand the cells of the first accepted rows to the debug sink.
    pub save_cells: bool,
    pub cell_padding: CellPadding,
    pub binarize: BinarizeOptions,
    pub min_columns: usize,
    pub min_rows: usize,
    pub filter: FilterPolicy,
}

impl Default for RosterParams {
    fn default() -> Self {
        Self {
            scale: 7,
            peak_frac: 0.18,
            force_order: true,
            debug: false,
            save_cells: false,
            cell_padding: CellPadding::default(),
            binarize: BinarizeOptions::default(),
            min_columns: 5,
            min_rows: 8,
            filter: FilterPolicy::default(),
        }
    }
}

impl RosterParams {
    pub fn validate(&self) -> Result<()> {
        if !SCALE_RANGE.contains(&self.scale) {
            return Err(RosterError::InvalidOption(format!(
                "scale must be within {}..={}, got {}",
                SCALE_RANGE.start(),
                SCALE_RANGE.end(),
                self.scale
            )));
        }
        if !PEAK_FRAC_RANGE.contains(&self.peak_frac) {
            return Err(RosterError::InvalidOption(format!(
                "peak_frac must be within {}..={}, got {}",
                PEAK_FRAC_RANGE.start(),
                PEAK_FRAC_RANGE.end(),
                self.peak_frac
            )));
        }
        if self.binarize.block_size < 3 || self.binarize.block_size % 2 == 0 {
            return Err(RosterError::InvalidOption(format!(
                "binarize.block_size must be odd and >= 3, got {}",
                self.binarize.block_size
            )));
        }
        Ok(())
    }

    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            peak_frac: self.peak_frac,
            min_column_bounds: self.min_columns,
            min_row_bounds: self.min_rows,
        }
    }
}
