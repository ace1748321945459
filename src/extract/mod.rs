//! Row-by-row reading of one page half.
//!
//! Every row band below the header row is read column by column. A band
//! yields a [`RowOutcome`]: an accepted player, a rejected layout row (its
//! name cell holds a structural label), or a blank separator.
pub mod cell;
pub mod fields;

pub use self::cell::{extract_cell, Cell, CellPadding};

use crate::columns::ColumnMap;
use crate::diagnostics::{CellDump, DebugSink};
use crate::grid::GridGeometry;
use crate::image::GrayImageU8;
use crate::ocr::Recognizer;
use crate::roster::PlayerRow;
use crate::text::{is_structural_name, normalize_label};
use crate::types::{FieldKey, PageHalf};
use log::debug;

/// Accepted rows per half whose cells are handed to the debug sink.
pub const SAVED_ROWS_PER_HALF: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted(PlayerRow),
    /// Layout row; carries the name text that triggered the rejection.
    Rejected(String),
    Blank,
}

/// Vertical pixel band of one table row, bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowBand {
    pub index: usize,
    pub top: usize,
    pub bottom: usize,
}

/// Inclusive pixel rows covered by `half` on a page of `height` rows.
pub fn half_range(half: PageHalf, height: usize) -> (usize, usize) {
    let mid = height / 2;
    match half {
        PageHalf::Top => (0, mid.saturating_sub(1)),
        PageHalf::Bottom => (mid, height.saturating_sub(1)),
    }
}

/// Reads rows of a located table out of the content-only mask.
pub struct TableReader<'a, R: Recognizer + ?Sized> {
    content: &'a GrayImageU8,
    geometry: &'a GridGeometry,
    columns: &'a ColumnMap,
    padding: CellPadding,
    recognizer: &'a R,
}

impl<'a, R: Recognizer + ?Sized> TableReader<'a, R> {
    pub fn new(
        content: &'a GrayImageU8,
        geometry: &'a GridGeometry,
        columns: &'a ColumnMap,
        padding: CellPadding,
        recognizer: &'a R,
    ) -> Self {
        Self {
            content,
            geometry,
            columns,
            padding,
            recognizer,
        }
    }

    /// Row bands after the header row that overlap `half`.
    pub fn row_bands(&self, half: PageHalf) -> Vec<RowBand> {
        let (y_start, y_end) = half_range(half, self.content.height());
        (1..self.geometry.row_count())
            .filter_map(|r| {
                let (upper, lower) = self.geometry.row_span(r);
                let band = RowBand {
                    index: r,
                    top: upper + 1,
                    bottom: lower.saturating_sub(1),
                };
                let usable = band.bottom > band.top && band.bottom >= y_start && band.top <= y_end;
                usable.then_some(band)
            })
            .collect()
    }

    /// Read every mapped cell of `band`.
    ///
    /// When `cells` is given, the text variant of each read cell is pushed
    /// onto it together with its column and field.
    pub fn read_row(
        &self,
        band: RowBand,
        mut cells: Option<&mut Vec<(usize, FieldKey, GrayImageU8)>>,
    ) -> RowOutcome {
        let mut row = PlayerRow::default();
        let mut seen = false;

        for (column, key) in self.columns.iter() {
            if column >= self.geometry.column_count() {
                continue;
            }
            let Some(cell) = extract_cell(
                self.content,
                self.geometry.column_span(column),
                (band.top, band.bottom),
                self.padding,
            ) else {
                continue;
            };

            match key {
                FieldKey::Name => {
                    let name = fields::read_name(&cell, self.recognizer);
                    if is_structural_name(&normalize_label(&name)) {
                        return RowOutcome::Rejected(name);
                    }
                    seen |= !name.is_empty();
                    row.name = name;
                }
                FieldKey::Jersey => {
                    let vote = fields::read_jersey_vote(&cell, self.recognizer);
                    row.jersey = fields::valid_jersey(vote);
                    seen |= vote != 0;
                }
                FieldKey::Starter => {
                    row.starter = fields::read_starter(&cell, self.recognizer);
                }
                FieldKey::PlayTime => {
                    row.play_time = fields::read_play_time(&cell, self.recognizer);
                }
                stat => {
                    if let Some(value) = fields::read_stat(stat, &cell, self.recognizer) {
                        row.set_stat(stat, value);
                        seen |= value != 0;
                    }
                }
            }
            if let Some(cells) = cells.as_deref_mut() {
                cells.push((column, key, cell.text));
            }
        }

        if row.name.is_empty() && row.jersey.is_none() && !seen {
            return RowOutcome::Blank;
        }
        row.reconcile();
        row.clamp_stats();
        RowOutcome::Accepted(row)
    }

    /// Accepted rows of `half`, top to bottom.
    ///
    /// With `save_cells`, the cells of the first accepted rows are passed to
    /// `sink`.
    pub fn read_half(
        &self,
        half: PageHalf,
        save_cells: bool,
        sink: &dyn DebugSink,
    ) -> Vec<PlayerRow> {
        let mut players = Vec::new();
        for band in self.row_bands(half) {
            let mut cells = Vec::new();
            let dump = save_cells && players.len() < SAVED_ROWS_PER_HALF;
            match self.read_row(band, dump.then_some(&mut cells)) {
                RowOutcome::Accepted(row) => {
                    for (column, key, image) in &cells {
                        sink.cell(&CellDump {
                            half,
                            row: players.len(),
                            column: *column,
                            key: *key,
                            image,
                        });
                    }
                    players.push(row);
                }
                RowOutcome::Rejected(name) => {
                    debug!("{} row {}: layout row '{name}' skipped", half.as_str(), band.index)
                }
                RowOutcome::Blank => {}
            }
        }
        debug!("{} half: {} rows accepted", half.as_str(), players.len());
        players
    }
}
