use crate::types::FieldKey;

/// Inclusive `(min, max)` range accepted for a field's numeric value.
pub fn stat_bounds(key: FieldKey) -> (u32, u32) {
    match key {
        FieldKey::FoulsCommitted => (0, 5),
        FieldKey::Threes
        | FieldKey::TwoInt
        | FieldKey::TwoExt
        | FieldKey::FtMade
        | FieldKey::ShotsMade => (0, 40),
        FieldKey::Points => (0, 99),
        _ => (0, u32::MAX),
    }
}

/// Clamp `value` into the range of `key`. Total and idempotent.
pub fn clamp_stat(key: FieldKey, value: i64) -> u32 {
    let (lo, hi) = stat_bounds(key);
    value.clamp(i64::from(lo), i64::from(hi)) as u32
}
