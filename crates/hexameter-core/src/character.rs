// Character classification for Beta Code transliterated Greek
//
// Lines arrive in Beta Code: Latin letters stand for Greek letters, and
// accents, breathings and length marks follow the letter they modify.
// Classification is case-insensitive; `*` capital markers and the sigma
// variant digits are stripped during normalization.

use std::ops::Range;

// ---------------------------------------------------------------------------
// Letter tables
// ---------------------------------------------------------------------------

/// Vowels: α ε η ι ο υ ω.
const VOWELS: &[char] = &['a', 'e', 'h', 'i', 'o', 'u', 'w'];

/// Consonants, including the digamma placeholder `v`.
const CONSONANTS: &[char] = &[
    'b', 'g', 'd', 'z', 'q', 'k', 'l', 'm', 'n', 'c', 'p', 'r', 's', 't', 'f', 'x', 'y', 'v',
];

/// Stops ("mutes"): π β φ τ δ θ κ γ χ.
const MUTES: &[char] = &['p', 'b', 'f', 't', 'd', 'q', 'k', 'g', 'x'];

/// Double consonants: ζ ξ ψ. Each closes the preceding syllable on its own.
const DOUBLE_CONSONANTS: &[char] = &['z', 'c', 'y'];

/// Vowel pairs that form a diphthong when the second vowel carries no diaeresis.
const DIPHTHONGS: &[[char; 2]] = &[
    ['a', 'i'],
    ['e', 'i'],
    ['o', 'i'],
    ['u', 'i'],
    ['a', 'u'],
    ['e', 'u'],
    ['o', 'u'],
    ['h', 'u'],
    ['w', 'u'],
];

/// The reconstructed digamma (/w/).
pub const DIGAMMA: char = 'v';

// ---------------------------------------------------------------------------
// Letter classes
// ---------------------------------------------------------------------------

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// True for every consonant letter, digamma included.
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c.to_ascii_lowercase())
}

pub fn is_letter(c: char) -> bool {
    is_vowel(c) || is_consonant(c)
}

pub fn is_mute(c: char) -> bool {
    MUTES.contains(&c.to_ascii_lowercase())
}

/// λ and ρ.
pub fn is_liquid(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'l' | 'r')
}

/// μ and ν.
pub fn is_nasal(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'm' | 'n')
}

pub fn is_double_consonant(c: char) -> bool {
    DOUBLE_CONSONANTS.contains(&c.to_ascii_lowercase())
}

pub fn is_digamma(c: char) -> bool {
    c.to_ascii_lowercase() == DIGAMMA
}

/// Check whether `first` + `second` can form a diphthong nucleus.
///
/// The caller is responsible for checking that `second` carries no
/// diaeresis (`+`).
pub fn is_diphthong(first: char, second: char) -> bool {
    let pair = [first.to_ascii_lowercase(), second.to_ascii_lowercase()];
    DIPHTHONGS.contains(&pair)
}

/// Vowels whose quantity cannot be read off the letter: α ι υ.
pub fn is_ambiguous_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'i' | 'u')
}

/// η and ω.
pub fn is_long_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'h' | 'w')
}

/// ε and ο.
pub fn is_short_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'e' | 'o')
}

// ---------------------------------------------------------------------------
// Diacritics and punctuation
// ---------------------------------------------------------------------------

pub const DIAERESIS: char = '+';
pub const IOTA_SUBSCRIPT: char = '|';
pub const CIRCUMFLEX: char = '=';
pub const MACRON: char = '_';
pub const BREVE: char = '^';

/// Diacritics that stay attached to a vowel nucleus.
pub fn is_vowel_diacritic(c: char) -> bool {
    matches!(c, DIAERESIS | IOTA_SUBSCRIPT | CIRCUMFLEX | MACRON | BREVE)
}

/// Accent marks (acute, grave, circumflex).
pub fn is_accent(c: char) -> bool {
    matches!(c, '/' | '\\' | CIRCUMFLEX)
}

/// Punctuation that marks a pause after the word it is attached to.
pub fn is_pause_mark(c: char) -> bool {
    matches!(c, ',' | '.' | ';' | ':' | '\u{00B7}')
}

/// Apostrophe marking an elided final vowel.
pub fn is_elision_mark(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{1FBD}')
}

// ---------------------------------------------------------------------------
// Token normalization
// ---------------------------------------------------------------------------

/// Lowercase a token and drop breathings, acute/grave accents, capital
/// markers, digits and punctuation, keeping letters and vowel diacritics.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|&c| is_letter(c) || is_vowel_diacritic(c))
        .collect()
}

/// Keep only the letters of a token, lowercased.
pub fn letters(token: &str) -> String {
    token
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|&c| is_letter(c))
        .collect()
}

/// Check whether a token carries any accent mark.
pub fn has_accent(token: &str) -> bool {
    token.chars().any(is_accent)
}

/// Check whether a token ends with an elision mark (ignoring trailing pause
/// punctuation).
pub fn is_elided(token: &str) -> bool {
    token
        .chars()
        .rev()
        .find(|&c| !is_pause_mark(c))
        .is_some_and(is_elision_mark)
}

/// Check whether a token is followed by a pause.
pub fn ends_with_pause(token: &str) -> bool {
    token
        .chars()
        .rev()
        .take_while(|&c| is_pause_mark(c) || is_elision_mark(c))
        .any(is_pause_mark)
}

/// Char ranges of the vowel nuclei in a normalized token.
///
/// A range covers the vowel letter(s) and the diacritics that follow them.
/// Two vowels form one diphthong nucleus when the pair is a diphthong, the
/// first vowel is unmarked and the second carries no diaeresis.
pub fn nucleus_spans(chars: &[char]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if !is_vowel(chars[i]) {
            i += 1;
            continue;
        }
        let start = i;
        i += 1;
        let first_marked = chars.get(i).is_some_and(|&c| is_vowel_diacritic(c));
        if !first_marked
            && chars.get(i).is_some_and(|&c| is_diphthong(chars[start], c))
            && chars.get(i + 1) != Some(&DIAERESIS)
        {
            i += 1;
        }
        while chars.get(i).is_some_and(|&c| is_vowel_diacritic(c)) {
            i += 1;
        }
        spans.push(start..i);
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_and_consonant_classes() {
        for c in ['a', 'e', 'h', 'i', 'o', 'u', 'w', 'A', 'H'] {
            assert!(is_vowel(c), "{c} should be a vowel");
            assert!(!is_consonant(c));
        }
        for c in ['b', 'q', 'c', 'y', 'v', 'S'] {
            assert!(is_consonant(c), "{c} should be a consonant");
            assert!(!is_vowel(c));
        }
        assert!(!is_letter('/'));
        assert!(!is_letter('j'));
    }

    #[test]
    fn cluster_classes() {
        assert!(is_mute('t') && is_mute('q') && is_mute('x'));
        assert!(!is_mute('s'));
        assert!(is_liquid('r') && is_liquid('l'));
        assert!(is_nasal('m') && is_nasal('n'));
        assert!(is_double_consonant('z') && is_double_consonant('c') && is_double_consonant('y'));
        assert!(is_digamma('v') && is_digamma('V'));
    }

    #[test]
    fn diphthong_pairs() {
        assert!(is_diphthong('a', 'i'));
        assert!(is_diphthong('o', 'u'));
        assert!(is_diphthong('h', 'u'));
        assert!(!is_diphthong('i', 'a'));
        assert!(!is_diphthong('a', 'o'));
    }

    #[test]
    fn vowel_quantity_classes() {
        assert!(is_long_vowel('h') && is_long_vowel('w'));
        assert!(is_short_vowel('e') && is_short_vowel('o'));
        assert!(is_ambiguous_vowel('a') && is_ambiguous_vowel('i') && is_ambiguous_vowel('u'));
    }

    #[test]
    fn normalize_strips_accents_and_breathings() {
        assert_eq!(normalize("*)/andra"), "andra");
        assert_eq!(normalize("mou=sa,"), "mou=sa");
        assert_eq!(normalize("a)i+/dh|"), "ai+dh|");
        assert_eq!(normalize("d'"), "d");
    }

    #[test]
    fn letters_drops_diacritics() {
        assert_eq!(letters("a)i+/dh|"), "aidh");
        assert_eq!(letters("QEA/"), "qea");
    }

    #[test]
    fn nucleus_spans_group_diphthongs() {
        let chars: Vec<char> = "mousa".chars().collect();
        assert_eq!(nucleus_spans(&chars), vec![1..3, 4..5]);
        let chars: Vec<char> = "ai+dh|".chars().collect();
        assert_eq!(nucleus_spans(&chars), vec![0..1, 1..3, 4..6]);
        let chars: Vec<char> = "ou=".chars().collect();
        assert_eq!(nucleus_spans(&chars), vec![0..3]);
        let chars: Vec<char> = "qeos".chars().collect();
        assert_eq!(nucleus_spans(&chars), vec![1..2, 2..3]);
    }

    #[test]
    fn accent_detection() {
        assert!(has_accent("a)/ndra"));
        assert!(has_accent("mou=sa"));
        assert!(!has_accent("o("));
    }

    #[test]
    fn elision_and_pause() {
        assert!(is_elided("d'"));
        assert!(is_elided("a)ll',"));
        assert!(!is_elided("de"));
        assert!(ends_with_pause("a)xilh=os,"));
        assert!(ends_with_pause("a)ll',"));
        assert!(!ends_with_pause("d'"));
        assert!(!ends_with_pause("qea/"));
    }
}
