//! Accepted header labels per field, already normalised.
//!
//! The table is consulted in this order; see [`match_label`] for the
//! matching rules.
use crate::types::FieldKey;

pub const HEADER_LABELS: &[(FieldKey, &[&str])] = &[
    (FieldKey::Jersey, &["n", "n maillot", "no maillot", "numero"]),
    (FieldKey::Name, &["nom", "nom prenom", "joueur", "joueurs"]),
    (FieldKey::Starter, &["5 de depart", "5 depart"]),
    (
        FieldKey::PlayTime,
        &["tps de jeu", "temps de jeu", "tps jeu", "tps", "temps"],
    ),
    (
        FieldKey::Points,
        &["nb pts marques", "pts", "total pts", "nb pts", "points"],
    ),
    (FieldKey::ShotsMade, &["nb tirs reussis", "tirs reussis"]),
    (FieldKey::Threes, &["3 pts reussis", "3pts", "3pts reussis"]),
    (FieldKey::TwoInt, &["2 int reussis", "2 int"]),
    (FieldKey::TwoExt, &["2 ext reussis", "2 ext"]),
    (
        FieldKey::FtMade,
        &["lf reussis", "lancers francs reussis", "lf"],
    ),
    (
        FieldKey::FoulsCommitted,
        &["ftes com", "fautes com", "fautes commises", "fautes"],
    ),
];

/// Minimum length of the shorter string for a prefix match.
pub const MIN_PREFIX_LEN: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Strength {
    Prefix,
    Exact,
}

/// Resolve a normalised header text to a field.
///
/// A variant matches exactly, or by prefix when one of the two strings starts
/// with the other and the shorter one has at least [`MIN_PREFIX_LEN`] chars
/// (truncated reads and trailing noise both occur). Exact matches win over
/// prefix matches; two different fields matching at the best strength make
/// the header ambiguous and yield `None`.
pub fn match_label(normalized: &str) -> Option<FieldKey> {
    if normalized.is_empty() {
        return None;
    }
    let mut best: Option<(Strength, FieldKey)> = None;
    let mut ambiguous = false;
    for &(key, variants) in HEADER_LABELS {
        let Some(strength) = variants
            .iter()
            .filter_map(|v| strength_of(normalized, v))
            .max()
        else {
            continue;
        };
        match best {
            Some((s, _)) if s > strength => {}
            Some((s, k)) if s == strength => ambiguous |= k != key,
            _ => {
                best = Some((strength, key));
                ambiguous = false;
            }
        }
    }
    match best {
        Some((_, key)) if !ambiguous => Some(key),
        _ => None,
    }
}

fn strength_of(text: &str, variant: &str) -> Option<Strength> {
    if text == variant {
        return Some(Strength::Exact);
    }
    let (short, long) = if text.len() < variant.len() {
        (text, variant)
    } else {
        (variant, text)
    };
    (short.chars().count() >= MIN_PREFIX_LEN && long.starts_with(short))
        .then_some(Strength::Prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_labels_resolve() {
        assert_eq!(match_label("n"), Some(FieldKey::Jersey));
        assert_eq!(match_label("nom prenom"), Some(FieldKey::Name));
        assert_eq!(match_label("fautes commises"), Some(FieldKey::FoulsCommitted));
        assert_eq!(match_label("3pts"), Some(FieldKey::Threes));
        assert_eq!(match_label("lf"), Some(FieldKey::FtMade));
    }

    #[test]
    fn truncated_and_noisy_reads_resolve_by_prefix() {
        assert_eq!(match_label("nb tirs reu"), Some(FieldKey::ShotsMade));
        assert_eq!(match_label("2 ext reussis i"), Some(FieldKey::TwoExt));
        assert_eq!(match_label("lancers"), Some(FieldKey::FtMade));
    }

    #[test]
    fn short_or_unknown_reads_are_unmapped() {
        assert_eq!(match_label(""), None);
        assert_eq!(match_label("zz"), None);
        assert_eq!(match_label("observations"), None);
    }

    #[test]
    fn prefix_ties_across_fields_are_ambiguous() {
        // Prefix of both "nb pts marques" (points) and "nb tirs reussis" (shots).
        assert_eq!(match_label("nb "), None);
        assert_eq!(match_label("nb"), None);
    }

    #[test]
    fn every_variant_is_normalised() {
        for (_, variants) in HEADER_LABELS {
            for v in *variants {
                assert_eq!(crate::text::normalize_label(v), *v);
            }
        }
    }
}
