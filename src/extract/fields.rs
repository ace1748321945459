//! Field-specific readers applied to one [`Cell`].
use super::cell::Cell;
use crate::ocr::{digit_vote, read_fouls, Recognizer, Vocabulary};
use crate::stats::clamp_stat;
use crate::text::normalize_label;
use crate::types::FieldKey;
use regex::Regex;
use std::sync::OnceLock;

static SEPARATED_CLOCK: OnceLock<Regex> = OnceLock::new();
static COMPACT_CLOCK: OnceLock<Regex> = OnceLock::new();

fn separated_clock() -> &'static Regex {
    SEPARATED_CLOCK.get_or_init(|| {
        Regex::new(r"(\d{1,2})[:.hH](\d{2})").expect("hardcoded clock regex is valid")
    })
}

fn compact_clock() -> &'static Regex {
    COMPACT_CLOCK
        .get_or_init(|| Regex::new(r"(\d{1,2})(\d{2})$").expect("hardcoded clock regex is valid"))
}

/// Free text of a name cell, trimmed.
pub fn read_name<R: Recognizer + ?Sized>(cell: &Cell, recognizer: &R) -> String {
    recognizer
        .recognize(&cell.text, Vocabulary::Text)
        .trim()
        .to_string()
}

/// Raw jersey vote; `0` when unreadable.
pub fn read_jersey_vote<R: Recognizer + ?Sized>(cell: &Cell, recognizer: &R) -> u32 {
    digit_vote(&cell.raw, recognizer)
}

/// Shirt numbers outside `1..=99` are treated as unread.
pub fn valid_jersey(vote: u32) -> Option<u8> {
    (1..=99).contains(&vote).then_some(vote as u8)
}

pub fn read_starter<R: Recognizer + ?Sized>(cell: &Cell, recognizer: &R) -> bool {
    is_crossmark(&recognizer.recognize(&cell.text, Vocabulary::Text))
}

/// Whether a starter cell carries an `x` / `×` mark.
pub fn is_crossmark(raw: &str) -> bool {
    raw.contains('×') || normalize_label(raw).contains('x')
}

pub fn read_play_time<R: Recognizer + ?Sized>(cell: &Cell, recognizer: &R) -> String {
    parse_play_time(&recognizer.recognize(&cell.text, Vocabulary::Clock)).unwrap_or_default()
}

/// `MM:SS` from `12:34`, `12.34`, `12h34` or a trailing compact `1234`.
pub fn parse_play_time(raw: &str) -> Option<String> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let digits: String = compact.chars().filter(char::is_ascii_digit).collect();
    let caps = separated_clock()
        .captures(&compact)
        .or_else(|| compact_clock().captures(&digits))?;
    let minutes: u32 = caps[1].parse().ok()?;
    let seconds: u32 = caps[2].parse().ok()?;
    Some(format!("{minutes:02}:{seconds:02}"))
}

/// Clamped value of a numeric column, or `None` for identity fields.
pub fn read_stat<R: Recognizer + ?Sized>(
    key: FieldKey,
    cell: &Cell,
    recognizer: &R,
) -> Option<u32> {
    let raw = match key {
        FieldKey::FoulsCommitted => read_fouls(&cell.raw, recognizer).value,
        k if k.is_stat() => digit_vote(&cell.raw, recognizer),
        _ => return None,
    };
    Some(clamp_stat(key, i64::from(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_time_formats() {
        assert_eq!(parse_play_time("12:34").as_deref(), Some("12:34"));
        assert_eq!(parse_play_time("7.05").as_deref(), Some("07:05"));
        assert_eq!(parse_play_time("9h30").as_deref(), Some("09:30"));
        assert_eq!(parse_play_time(" 2 5 4 8").as_deref(), Some("25:48"));
        assert_eq!(parse_play_time("832").as_deref(), Some("08:32"));
        assert_eq!(parse_play_time("5"), None);
        assert_eq!(parse_play_time(""), None);
    }

    #[test]
    fn crossmarks() {
        assert!(is_crossmark("X"));
        assert!(is_crossmark(" x "));
        assert!(is_crossmark("×"));
        assert!(!is_crossmark(""));
        assert!(!is_crossmark("--"));
    }

    #[test]
    fn jersey_range() {
        assert_eq!(valid_jersey(0), None);
        assert_eq!(valid_jersey(23), Some(23));
        assert_eq!(valid_jersey(99), Some(99));
        assert_eq!(valid_jersey(100), None);
    }
}
