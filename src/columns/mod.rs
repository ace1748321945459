//! Column → field assignment.
//!
//! Two modes:
//! - forced order: the first N columns take the canonical template order;
//! - adaptive: the header row is recognised and matched against
//!   [`labels::HEADER_LABELS`], followed by repairs for the name and jersey
//!   columns which are often unreadable in headers.
pub mod labels;

use self::labels::match_label;
use crate::grid::GridGeometry;
use crate::image::GrayImageU8;
use crate::ocr::{Recognizer, Vocabulary};
use crate::text::normalize_label;
use crate::types::FieldKey;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Inset applied to header cells before recognition.
const HEADER_INSET: usize = 2;
/// The jersey repair looks only at the leftmost columns.
const JERSEY_SEARCH_COLUMNS: usize = 3;

/// Partial mapping column index → field, with unique fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColumnMap {
    entries: BTreeMap<usize, FieldKey>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `column` to `key`, replacing the column's previous field.
    ///
    /// Returns `false` and leaves the map untouched when `key` is already
    /// claimed by a different column.
    pub fn insert(&mut self, column: usize, key: FieldKey) -> bool {
        match self.column_of(key) {
            Some(c) if c != column => false,
            _ => {
                self.entries.insert(column, key);
                true
            }
        }
    }

    pub fn get(&self, column: usize) -> Option<FieldKey> {
        self.entries.get(&column).copied()
    }

    pub fn column_of(&self, key: FieldKey) -> Option<usize> {
        self.entries
            .iter()
            .find_map(|(&c, &k)| (k == key).then_some(c))
    }

    pub fn contains_field(&self, key: FieldKey) -> bool {
        self.column_of(key).is_some()
    }

    pub fn remove(&mut self, column: usize) -> Option<FieldKey> {
        self.entries.remove(&column)
    }

    /// `(column, field)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, FieldKey)> + '_ {
        self.entries.iter().map(|(&c, &k)| (c, k))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Positional mapping onto [`FieldKey::CANONICAL_ORDER`].
pub fn forced_order(column_count: usize) -> ColumnMap {
    let mut map = ColumnMap::new();
    for (column, &key) in FieldKey::CANONICAL_ORDER
        .iter()
        .enumerate()
        .take(column_count)
    {
        map.insert(column, key);
    }
    map
}

pub fn classify_columns<R: Recognizer + ?Sized>(
    content: &GrayImageU8,
    geometry: &GridGeometry,
    force_order: bool,
    recognizer: &R,
) -> ColumnMap {
    let map = if force_order {
        forced_order(geometry.column_count())
    } else {
        classify_from_header(content, geometry, recognizer)
    };
    debug!(
        "classify_columns force_order={force_order}: {:?}",
        map.iter().collect::<Vec<_>>()
    );
    map
}

/// Adaptive mode: match the recognised header row against the label table.
pub fn classify_from_header<R: Recognizer + ?Sized>(
    content: &GrayImageU8,
    geometry: &GridGeometry,
    recognizer: &R,
) -> ColumnMap {
    let columns = geometry.column_count();
    if columns == 0 || geometry.row_count() == 0 {
        return ColumnMap::new();
    }
    let (top, bottom) = geometry.row_span(0);
    let (y0, y1) = (top + HEADER_INSET, bottom.saturating_sub(HEADER_INSET));

    let mut map = ColumnMap::new();
    for column in 0..columns {
        let (left, right) = geometry.column_span(column);
        let cell = content.crop(left + HEADER_INSET, y0, right.saturating_sub(HEADER_INSET), y1);
        if cell.is_empty() {
            continue;
        }
        let text = normalize_label(&recognizer.recognize(&cell.inverted(), Vocabulary::Text));
        match match_label(&text) {
            Some(key) if map.insert(column, key) => {}
            Some(key) => debug!("header column {column} '{text}' repeats {key}, left unmapped"),
            None => debug!("header column {column} '{text}' unmatched"),
        }
    }

    if map.is_empty() {
        debug!("no header label matched, falling back to template order");
        return forced_order(columns);
    }
    repair_name_column(&mut map, geometry);
    repair_jersey_column(&mut map, geometry);
    map
}

/// Widest unmapped column becomes the name column.
fn repair_name_column(map: &mut ColumnMap, geometry: &GridGeometry) {
    if map.contains_field(FieldKey::Name) {
        return;
    }
    let widest = (0..geometry.column_count())
        .filter(|&c| map.get(c).is_none())
        .max_by_key(|&c| (geometry.column_width(c), c));
    if let Some(column) = widest {
        map.insert(column, FieldKey::Name);
    }
}

/// Narrowest of the leftmost columns becomes the jersey column.
fn repair_jersey_column(map: &mut ColumnMap, geometry: &GridGeometry) {
    if map.contains_field(FieldKey::Jersey) {
        return;
    }
    let narrowest = (0..geometry.column_count().min(JERSEY_SEARCH_COLUMNS))
        .filter(|&c| map.get(c) != Some(FieldKey::Name))
        .min_by_key(|&c| geometry.column_width(c));
    if let Some(column) = narrowest {
        map.remove(column);
        map.insert(column, FieldKey::Jersey);
    }
}
