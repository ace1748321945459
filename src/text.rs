//! Label normalisation and the structural-row vocabulary.
//!
//! Everything here is data plus pure functions: header and name cells are
//! compared only after [`normalize_label`].

/// Normalised names of rows that are part of the sheet layout, not players.
pub const STRUCTURAL_TOKENS: &[&str] = &[
    "mi temps",
    "prolongation",
    "prolongations",
    "prolong",
    "prolo",
    "ongation",
    "entraineur",
    "totaux",
    "totaux equipe",
    "total",
    "total equipe",
    "depart",
    "a",
    "c",
    "de",
    "es",
    "ipe",
    "locaux",
    "visiteurs",
    "nom prenom",
    "resume",
    "equipe",
];

/// Substring of the "5 de départ" (starting five) label.
pub const STARTING_FIVE_TOKEN: &str = "depart";

/// Case-fold, strip French diacritics, turn every non-word character into a
/// space, collapse whitespace and trim.
pub fn normalize_label(s: &str) -> String {
    let folded: String = s
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match fold_diacritic(c) {
            c if c.is_alphanumeric() || c == '_' => c,
            _ => ' ',
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_diacritic(c: char) -> char {
    match c {
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'à' | 'â' | 'ä' => 'a',
        'ù' | 'û' | 'ü' => 'u',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'ç' => 'c',
        other => other,
    }
}

/// Name cells that abort the row under construction.
pub fn is_structural_name(normalized: &str) -> bool {
    STRUCTURAL_TOKENS.contains(&normalized) || normalized.contains(STARTING_FIVE_TOKEN)
}

/// Wider check used when cleaning finished rosters.
pub fn is_non_player_name(normalized: &str) -> bool {
    is_structural_name(normalized)
        || normalized.contains("mi temps")
        || normalized.contains("prolong")
        || normalized.contains("entraineur")
        || normalized.chars().count() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_folds_case_accents_and_punctuation() {
        assert_eq!(normalize_label("  Nom  Prénom "), "nom prenom");
        assert_eq!(normalize_label("N° Maillot"), "n maillot");
        assert_eq!(normalize_label("MI-TEMPS"), "mi temps");
        assert_eq!(normalize_label("Entraîneur :"), "entraineur");
        assert_eq!(normalize_label("—"), "");
        assert_eq!(normalize_label("Fautes\tcom."), "fautes com");
    }

    #[test]
    fn normalization_is_idempotent() {
        for s in ["Tps de jeu", "3 PTS réussis", "  x  ", "LF-Réussis!!"] {
            let once = normalize_label(s);
            assert_eq!(normalize_label(&once), once);
        }
    }

    #[test]
    fn structural_names() {
        assert!(is_structural_name("mi temps"));
        assert!(is_structural_name("5 de depart"));
        assert!(is_structural_name("entraineur"));
        assert!(!is_structural_name("dupont jean"));
        assert!(!is_structural_name(""));
        assert!(is_non_player_name("entraineur adjoint dupont"));
        assert!(is_non_player_name("prolongation 2"));
        assert!(is_non_player_name("b"));
        assert!(!is_non_player_name("martin leo"));
    }
}
