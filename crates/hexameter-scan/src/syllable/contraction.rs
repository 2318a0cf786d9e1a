// Vowel contraction (synizesis)
//
// Two adjacent vowel nuclei of one word pronounced as a single long syllable.
// The basic set covers the frequent word-final ε + ω/ο/α endings (Πηληϊάδεω,
// -εος, -εας); the extended set lets ε merge with any following vowel.

use hexameter_core::character::DIAERESIS;
use hexameter_core::enums::Length;

use crate::phonology::{Phoneme, Vowel};

/// Which contractions a pass allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContractionLevel {
    #[default]
    None,
    Basic,
    Extended,
}

/// Word endings (vowel + final consonants) that contract with a preceding ε.
const BASIC_ENDINGS: &[&str] = &["w", "wn", "ws", "os", "as"];

fn contractible(first: &Vowel, second: &Vowel, rest: &[Phoneme], level: ContractionLevel) -> bool {
    if first.letters != "e" || !first.diacritics.is_empty() || second.has_diacritic(DIAERESIS) {
        return false;
    }
    match level {
        ContractionLevel::None => false,
        ContractionLevel::Extended => true,
        ContractionLevel::Basic => {
            let mut ending = second.letters.clone();
            for phoneme in rest {
                match phoneme {
                    Phoneme::Boundary(_) => break,
                    Phoneme::Consonant(c) => ending.push(*c),
                    Phoneme::Vowel(_) | Phoneme::Digamma => return false,
                }
            }
            BASIC_ENDINGS.contains(&ending.as_str())
        }
    }
}

/// Merge contractible vowel pairs into single long nuclei.
pub fn contract(phonemes: &[Phoneme], level: ContractionLevel) -> Vec<Phoneme> {
    let mut out = Vec::with_capacity(phonemes.len());
    let mut i = 0;
    while i < phonemes.len() {
        if let (Some(Phoneme::Vowel(first)), Some(Phoneme::Vowel(second))) =
            (phonemes.get(i), phonemes.get(i + 1))
        {
            if contractible(first, second, &phonemes[i + 2..], level) {
                out.push(Phoneme::Vowel(Vowel {
                    letters: format!("{}{}", first.letters, second.letters),
                    diacritics: second.diacritics.clone(),
                    length: Length::Long,
                    contracted: true,
                }));
                i += 2;
                continue;
            }
        }
        out.push(phonemes[i].clone());
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexameter_core::{Lexicon, Token};

    use crate::phonology::segment_line;

    fn phonemes(text: &str) -> Vec<Phoneme> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let tokens: Vec<Token<'_>> = words.iter().map(|w| Token::new(w, &[])).collect();
        segment_line(&tokens, &Lexicon::new(), true)
    }

    fn nuclei(phonemes: &[Phoneme]) -> Vec<String> {
        phonemes
            .iter()
            .filter_map(Phoneme::as_vowel)
            .map(|v| v.letters.clone())
            .collect()
    }

    #[test]
    fn no_contraction_keeps_phonemes() {
        let input = phonemes("*phlhi+a/dew");
        assert_eq!(contract(&input, ContractionLevel::None), input);
    }

    #[test]
    fn basic_merges_word_final_ending() {
        let merged = contract(&phonemes("*phlhi+a/dew *)axilh=os"), ContractionLevel::Basic);
        assert_eq!(nuclei(&merged), vec!["h", "h", "i", "a", "ew", "a", "i", "h", "o"]);
        let ew = merged.iter().filter_map(Phoneme::as_vowel).nth(4).unwrap();
        assert!(ew.contracted);
        assert_eq!(ew.length, Length::Long);
    }

    #[test]
    fn basic_requires_word_end() {
        let merged = contract(&phonemes("qeoi/"), ContractionLevel::Basic);
        assert_eq!(nuclei(&merged), vec!["e", "oi"]);
        let merged = contract(&phonemes("qeo/n"), ContractionLevel::Basic);
        assert_eq!(nuclei(&merged), vec!["e", "o"]);
    }

    #[test]
    fn basic_accepts_listed_endings_only() {
        for word in ["xrusew", "xrusewn", "xrusews", "xruseos", "xruseas"] {
            let merged = contract(&phonemes(word), ContractionLevel::Basic);
            assert_eq!(nuclei(&merged).len(), 2, "{word}");
        }
    }

    #[test]
    fn extended_merges_inside_words() {
        let merged = contract(&phonemes("qeoi/"), ContractionLevel::Extended);
        assert_eq!(nuclei(&merged), vec!["eoi"]);
    }

    #[test]
    fn diaeresis_blocks_contraction() {
        let merged = contract(&phonemes("qew+"), ContractionLevel::Extended);
        assert_eq!(nuclei(&merged), vec!["e", "w"]);
    }
}
