//! Table grid recovery from the ruling-lines mask.
//!
//! Column and row boundaries are the peaks of the lines mask's projection
//! profiles. A second attempt with a relaxed peak fraction is made when too
//! few lines are found; if that also fails the geometry is empty, which
//! callers treat as "no table on this page" rather than an error.
pub mod profile;

use self::profile::{column_profile, peak_centers, row_profile};
use crate::image::GrayImageU8;
use log::debug;
use serde::{Deserialize, Serialize};

/// Lowest peak fraction used by the relaxed retry.
pub const MIN_PEAK_FRAC: f32 = 0.10;
/// Step applied to the configured fraction for the relaxed retry.
pub const RELAX_STEP: f32 = 0.05;

/// Ordered boundary coordinates of the detected table grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GridGeometry {
    pub column_bounds: Vec<usize>,
    pub row_bounds: Vec<usize>,
}

impl GridGeometry {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        !self.column_bounds.is_empty() && !self.row_bounds.is_empty()
    }

    /// Number of columns (gaps between consecutive column bounds).
    pub fn column_count(&self) -> usize {
        self.column_bounds.len().saturating_sub(1)
    }

    pub fn row_count(&self) -> usize {
        self.row_bounds.len().saturating_sub(1)
    }

    /// `(left, right)` bounds of column `i`.
    pub fn column_span(&self, i: usize) -> (usize, usize) {
        (self.column_bounds[i], self.column_bounds[i + 1])
    }

    /// `(top, bottom)` bounds of row band `r`.
    pub fn row_span(&self, r: usize) -> (usize, usize) {
        (self.row_bounds[r], self.row_bounds[r + 1])
    }

    pub fn column_width(&self, i: usize) -> usize {
        let (x0, x1) = self.column_span(i);
        x1 - x0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// A profile entry is a peak when it exceeds `peak_frac * max`.
    pub peak_frac: f32,
    /// Minimum number of column bounds for a usable grid.
    pub min_column_bounds: usize,
    /// Minimum number of row bounds for a usable grid.
    pub min_row_bounds: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            peak_frac: 0.18,
            min_column_bounds: 5,
            min_row_bounds: 8,
        }
    }
}

pub struct GridLocator {
    options: GridOptions,
}

impl GridLocator {
    pub fn new(options: GridOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn locate(&self, lines: &GrayImageU8) -> GridGeometry {
        let columns = column_profile(lines);
        let rows = row_profile(lines);

        let frac = self.options.peak_frac;
        let mut geometry = Self::bounds_at(&columns, &rows, frac);
        if !self.is_usable(&geometry) {
            let relaxed = MIN_PEAK_FRAC.max(frac - RELAX_STEP);
            debug!(
                "GridLocator::locate cols={} rows={} at frac={frac:.2}, retrying at {relaxed:.2}",
                geometry.column_bounds.len(),
                geometry.row_bounds.len()
            );
            geometry = Self::bounds_at(&columns, &rows, relaxed);
        }
        if !self.is_usable(&geometry) {
            debug!(
                "GridLocator::locate no table (cols={} rows={})",
                geometry.column_bounds.len(),
                geometry.row_bounds.len()
            );
            return GridGeometry::not_found();
        }
        debug!(
            "GridLocator::locate found {} columns x {} rows",
            geometry.column_count(),
            geometry.row_count()
        );
        geometry
    }

    fn bounds_at(columns: &[u64], rows: &[u64], frac: f32) -> GridGeometry {
        GridGeometry {
            column_bounds: peak_centers(columns, frac),
            row_bounds: peak_centers(rows, frac),
        }
    }

    fn is_usable(&self, geometry: &GridGeometry) -> bool {
        geometry.column_bounds.len() >= self.options.min_column_bounds
            && geometry.row_bounds.len() >= self.options.min_row_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruled_mask(w: usize, h: usize, xs: &[usize], ys: &[usize]) -> GrayImageU8 {
        let mut mask = GrayImageU8::filled(w, h, 0);
        for &x in xs {
            for y in 0..h {
                mask.set(x, y, 255);
            }
        }
        for &y in ys {
            for x in 0..w {
                mask.set(x, y, 255);
            }
        }
        mask
    }

    #[test]
    fn locates_ruled_grid() {
        let xs = [5, 20, 40, 60, 80, 95];
        let ys: Vec<usize> = (0..9).map(|i| 4 + i * 10).collect();
        let mask = ruled_mask(100, 100, &xs, &ys);
        let geometry = GridLocator::new(GridOptions::default()).locate(&mask);
        assert_eq!(geometry.column_bounds, xs.to_vec());
        assert_eq!(geometry.row_bounds, ys);
        assert_eq!(geometry.column_count(), 5);
        assert_eq!(geometry.row_count(), 8);
    }

    #[test]
    fn too_few_rows_is_not_found() {
        let mask = ruled_mask(100, 100, &[5, 20, 40, 60, 80], &[10, 50, 90]);
        let geometry = GridLocator::new(GridOptions::default()).locate(&mask);
        assert!(!geometry.is_found());
        assert_eq!(geometry, GridGeometry::not_found());
    }

    #[test]
    fn relaxed_retry_recovers_faint_lines() {
        // Full-height column lines plus two short ones reaching 17% of the max.
        let mut mask = ruled_mask(100, 100, &[10, 30, 50], &[]);
        for x in [70, 90] {
            for y in 0..10 {
                mask.set(x, y, 255);
            }
        }
        for i in 0..8 {
            let y = 5 + i * 12;
            for x in 0..100 {
                mask.set(x, y, 255);
            }
        }
        let geometry = GridLocator::new(GridOptions::default()).locate(&mask);
        assert_eq!(geometry.column_bounds, vec![10, 30, 50, 70, 90]);
    }

    #[test]
    fn blank_mask_is_not_found() {
        let mask = GrayImageU8::filled(50, 50, 0);
        assert!(!GridLocator::new(GridOptions::default())
            .locate(&mask)
            .is_found());
    }
}
