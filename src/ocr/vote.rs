//! Majority vote over several binarisations of one numeric cell.
use super::{parse_digits, Recognizer, Vocabulary};
use crate::binarize::threshold::{blur_3x3, otsu_binarize};
use crate::image::GrayImageU8;

/// Most frequent value; ties go to the value seen first.
pub fn majority(values: &[u32]) -> Option<u32> {
    let mut counts: Vec<(u32, usize)> = Vec::new();
    for &v in values {
        match counts.iter_mut().find(|(value, _)| *value == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }
    let mut best: Option<(u32, usize)> = None;
    for (value, n) in counts {
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((value, n));
        }
    }
    best.map(|(value, _)| value)
}

/// Recognised value of a numeric cell, `0` when no attempt yields digits.
///
/// Attempts: the cell as-is, its Otsu binarisation, and the inverse Otsu
/// binarisation of a lightly blurred copy.
pub fn digit_vote<R: Recognizer + ?Sized>(cell: &GrayImageU8, recognizer: &R) -> u32 {
    if cell.is_empty() {
        return 0;
    }
    let variants = [
        cell.clone(),
        otsu_binarize(cell, false),
        otsu_binarize(&blur_3x3(cell), true),
    ];
    let reads: Vec<u32> = variants
        .iter()
        .filter_map(|v| parse_digits(&recognizer.recognize(v, Vocabulary::Digits)))
        .collect();
    majority(&reads).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Script(RefCell<Vec<&'static str>>);

    impl Recognizer for Script {
        fn recognize(&self, _patch: &GrayImageU8, vocabulary: Vocabulary) -> String {
            assert_eq!(vocabulary, Vocabulary::Digits);
            self.0.borrow_mut().remove(0).to_string()
        }
    }

    fn cell() -> GrayImageU8 {
        let mut c = GrayImageU8::filled(8, 8, 0);
        c.set(3, 3, 255);
        c
    }

    #[test]
    fn majority_prefers_frequency_then_first_seen() {
        assert_eq!(majority(&[3, 8, 8]), Some(8));
        assert_eq!(majority(&[8, 3]), Some(8));
        assert_eq!(majority(&[3, 8]), Some(3));
        assert_eq!(majority(&[]), None);
    }

    #[test]
    fn vote_combines_three_reads() {
        let rec = Script(RefCell::new(vec!["12", "", "12"]));
        assert_eq!(digit_vote(&cell(), &rec), 12);
        let rec = Script(RefCell::new(vec!["1", "7", "7"]));
        assert_eq!(digit_vote(&cell(), &rec), 7);
    }

    #[test]
    fn vote_defaults_to_zero() {
        let rec = Script(RefCell::new(vec!["", "?", " "]));
        assert_eq!(digit_vote(&cell(), &rec), 0);
        let rec = Script(RefCell::new(vec![]));
        assert_eq!(digit_vote(&GrayImageU8::new(0, 0, Vec::new()), &rec), 0);
    }
}
