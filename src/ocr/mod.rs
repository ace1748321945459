//! Glyph recognition contract and the voting schemes built on top of it.
//!
//! The recogniser itself is an external collaborator: it receives an image
//! patch plus a [`Vocabulary`] and returns whatever it read. Failures and
//! timeouts are reported as an empty string, never as an error, so a missed
//! cell simply takes its zero/empty default.
pub mod fouls;
pub mod tesseract;
pub mod vote;

pub use self::fouls::{read_fouls, FoulReading, HoleStats};
pub use self::tesseract::TesseractCli;
pub use self::vote::{digit_vote, majority};

use crate::image::GrayImageU8;
use serde::Serialize;

/// Character set and layout hint for one recognition call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vocabulary {
    /// Free text on one line (names, header labels, crossmarks).
    Text,
    /// A non-negative integer, `0-9`.
    Digits,
    /// A single foul count, `0-5`.
    FoulDigits,
    /// A clock reading, `0-9` and `:`.
    Clock,
}

impl Vocabulary {
    /// Characters the recogniser may emit, `None` for unrestricted text.
    pub fn whitelist(self) -> Option<&'static str> {
        match self {
            Vocabulary::Text => None,
            Vocabulary::Digits => Some("0123456789"),
            Vocabulary::FoulDigits => Some("012345"),
            Vocabulary::Clock => Some("0123456789:"),
        }
    }
}

pub trait Recognizer {
    /// Read `patch` restricted to `vocabulary`; `""` when nothing was read.
    fn recognize(&self, patch: &GrayImageU8, vocabulary: Vocabulary) -> String;
}

impl<R: Recognizer + ?Sized> Recognizer for &R {
    fn recognize(&self, patch: &GrayImageU8, vocabulary: Vocabulary) -> String {
        (**self).recognize(patch, vocabulary)
    }
}

impl<R: Recognizer + ?Sized> Recognizer for Box<R> {
    fn recognize(&self, patch: &GrayImageU8, vocabulary: Vocabulary) -> String {
        (**self).recognize(patch, vocabulary)
    }
}

/// Digits of `text` as a number, ignoring every other character.
pub fn parse_digits(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
