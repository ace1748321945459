//! Scoresheet extraction driver.
//!
//! [`RosterExtractor`] runs the stages in order on one page raster:
//! binarize → locate grid → classify columns → read the rows of each page
//! half → filter and deduplicate. A page without a usable grid produces two
//! empty rosters; recognition misses only blank individual fields.
mod params;
mod report;

pub use params::{RosterParams, PEAK_FRAC_RANGE, SCALE_RANGE};
pub use report::ExtractionReport;

use crate::binarize::binarize_page;
use crate::columns::{classify_columns, ColumnMap};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{render_overlay, DebugSink, NullSink, TimingBreakdown};
use crate::error::Result;
use crate::extract::TableReader;
use crate::grid::GridLocator;
use crate::image::{GrayImageU8, ImageU8};
use crate::ocr::Recognizer;
use crate::roster::{clean_players, TeamRoster};
use crate::types::PageHalf;
use image::RgbImage;
use log::debug;
use std::time::Instant;

pub struct RosterExtractor<R: Recognizer> {
    params: RosterParams,
    locator: GridLocator,
    recognizer: R,
}

impl<R: Recognizer> RosterExtractor<R> {
    /// Validate `params` and build an extractor reading cells with `recognizer`.
    pub fn new(params: RosterParams, recognizer: R) -> Result<Self> {
        params.validate()?;
        let locator = GridLocator::new(params.grid_options());
        Ok(Self {
            params,
            locator,
            recognizer,
        })
    }

    pub fn params(&self) -> &RosterParams {
        &self.params
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Home and visiting rosters of a grayscale page.
    pub fn process(&self, gray: ImageU8<'_>) -> [TeamRoster; 2] {
        self.process_with_diagnostics(gray, &NullSink).into_teams()
    }

    pub fn process_rgb(&self, page: &RgbImage, sink: &dyn DebugSink) -> ExtractionReport {
        let gray = GrayImageU8::from_gray_image(image::imageops::grayscale(page));
        self.process_with_diagnostics(gray.as_view(), sink)
    }

    /// Run every stage, recording timings, the geometry and the column map.
    pub fn process_with_diagnostics(
        &self,
        gray: ImageU8<'_>,
        sink: &dyn DebugSink,
    ) -> ExtractionReport {
        let (width, height) = (gray.w, gray.h);
        debug!(
            "RosterExtractor::process start w={width} h={height} force_order={}",
            self.params.force_order
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let page = timings.time("binarize", || binarize_page(gray, &self.params.binarize));
        let geometry = timings.time("grid", || self.locator.locate(&page.lines));

        let mut column_map = ColumnMap::new();
        let mut raw_rows = [0usize; 2];
        let mut teams = [TeamRoster::empty(PageHalf::Top), TeamRoster::empty(PageHalf::Bottom)];

        if geometry.is_found() {
            column_map = timings.time("columns", || {
                classify_columns(
                    &page.content,
                    &geometry,
                    self.params.force_order,
                    &self.recognizer,
                )
            });
            let reader = TableReader::new(
                &page.content,
                &geometry,
                &column_map,
                self.params.cell_padding,
                &self.recognizer,
            );
            for (slot, half) in [PageHalf::Top, PageHalf::Bottom].into_iter().enumerate() {
                let rows_start = Instant::now();
                let rows = reader.read_half(half, self.params.save_cells, sink);
                timings.push(format!("rows_{}", half.as_str()), elapsed_ms(rows_start));
                raw_rows[slot] = rows.len();

                let players = timings.time("filter", || clean_players(rows, &self.params.filter));
                debug!(
                    "{}: {} rows -> {} players",
                    half.team_name(),
                    raw_rows[slot],
                    players.len()
                );
                teams[slot] = TeamRoster::new(half, players);
            }
        } else {
            debug!("RosterExtractor::process no table grid, returning empty rosters");
        }

        let overlay = self
            .params
            .debug
            .then(|| timings.time("overlay", || render_overlay(&page.content, &geometry)));
        timings.total_ms = elapsed_ms(total_start);

        ExtractionReport {
            width,
            height,
            teams,
            raw_rows,
            geometry,
            column_map,
            timings,
            overlay,
        }
    }
}
