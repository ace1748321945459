use crate::columns::ColumnMap;
use crate::diagnostics::TimingBreakdown;
use crate::grid::GridGeometry;
use crate::roster::TeamRoster;
use crate::types::PageHalf;
use image::RgbImage;
use serde::Serialize;

/// Everything one extraction produced, rosters first.
#[derive(Clone, Debug, Serialize)]
pub struct ExtractionReport {
    pub width: usize,
    pub height: usize,
    /// Home (top) then visiting (bottom) team, cleaned.
    pub teams: [TeamRoster; 2],
    /// Accepted rows per half before filtering and deduplication.
    pub raw_rows: [usize; 2],
    pub geometry: GridGeometry,
    pub column_map: ColumnMap,
    pub timings: TimingBreakdown,
    /// Grid overlay, rendered when requested.
    #[serde(skip)]
    pub overlay: Option<RgbImage>,
}

impl ExtractionReport {
    pub fn team(&self, half: PageHalf) -> &TeamRoster {
        match half {
            PageHalf::Top => &self.teams[0],
            PageHalf::Bottom => &self.teams[1],
        }
    }

    pub fn into_teams(self) -> [TeamRoster; 2] {
        self.teams
    }
}
