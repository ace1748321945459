//! Run diagnostics: per-stage timings, the grid overlay and cell dumps.
//!
//! Nothing here writes to a fixed location. The overlay is returned to the
//! caller inside the extraction report, and cell dumps go through a
//! [`DebugSink`] chosen per request.
pub mod overlay;
pub mod sink;
pub mod timing;

pub use overlay::{render_overlay, COLUMN_COLOR, ROW_COLOR};
pub use sink::{CellDump, DebugSink, DirSink, MemorySink, NullSink};
pub use timing::{StageTiming, TimingBreakdown};
