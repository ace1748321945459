//! Request-scoped destinations for per-cell debug images.
use crate::image::io::save_gray_png;
use crate::image::GrayImageU8;
use crate::types::{FieldKey, PageHalf};
use log::warn;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One cell image handed to a [`DebugSink`].
#[derive(Clone, Copy, Debug)]
pub struct CellDump<'a> {
    pub half: PageHalf,
    /// Index of the accepted row within its half.
    pub row: usize,
    pub column: usize,
    pub key: FieldKey,
    pub image: &'a GrayImageU8,
}

impl CellDump<'_> {
    /// `<half>/row<N>/<column>_<key>.png`
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.half.as_str())
            .join(format!("row{}", self.row))
            .join(format!("{:02}_{}.png", self.column, self.key))
    }
}

pub trait DebugSink {
    fn cell(&self, dump: &CellDump<'_>);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn cell(&self, _dump: &CellDump<'_>) {}
}

/// Writes each cell as PNG below a caller-chosen directory.
#[derive(Clone, Debug)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DebugSink for DirSink {
    fn cell(&self, dump: &CellDump<'_>) {
        let path = self.root.join(dump.relative_path());
        if let Err(e) = save_gray_png(dump.image, &path) {
            warn!("failed to write cell dump {}: {e}", path.display());
        }
    }
}

/// Keeps cells in memory, keyed by their relative path.
#[derive(Debug, Default)]
pub struct MemorySink {
    cells: Mutex<Vec<(PathBuf, GrayImageU8)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_cells(self) -> Vec<(PathBuf, GrayImageU8)> {
        self.cells.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl DebugSink for MemorySink {
    fn cell(&self, dump: &CellDump<'_>) {
        let entry = (dump.relative_path(), dump.image.clone());
        match self.cells.lock() {
            Ok(mut cells) => cells.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

impl<S: DebugSink + ?Sized> DebugSink for &S {
    fn cell(&self, dump: &CellDump<'_>) {
        (**self).cell(dump)
    }
}
