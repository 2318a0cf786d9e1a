// Stem alignment: vowel lengths and digammas from the lexicon
//
// Every parse of a token names a lemma. For each lexicon stem of that lemma
// (in the slot the parse selects) we try to read the stem as a prefix of the
// token, letting the token omit digammas the stem carries. A matching stem
// gives the lengths of the vowels it covers; the ending class of the lemma
// completes the rest.
//
// Among the successful alignments only the longest stem match is kept, and a
// match that needs no digamma beats one that does. Remaining candidates are
// unified vowel by vowel, so disagreeing parses leave a vowel unknown.

use std::ops::Range;

use hexameter_core::character::{
    is_ambiguous_vowel, is_digamma, is_letter, is_vowel, is_vowel_diacritic,
};
use hexameter_core::enums::Length;
use hexameter_core::{Lexicon, Parse};

use super::endings::{EndingRule, rule_for};

/// Why a token could not be aligned. Never fatal: the caller falls back to
/// default lengths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignmentMiss {
    /// None of the token's parses names a lemma in the lexicon.
    #[error("no lexicon entry for any parse of {0:?}")]
    LookupMiss(String),

    /// Entries were found but no stem is a prefix of the token.
    #[error("no stem matches {0:?}")]
    StemMismatch(String),
}

/// Result of a successful alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// One length per vowel nucleus of the token.
    pub lengths: Vec<Length>,
    /// Char offsets in the normalized token where a digamma is restored.
    pub digammas: Vec<usize>,
}

#[derive(Debug)]
struct StemMatch {
    /// Char offset just past the last matched token letter.
    end: usize,
    digammas: Vec<usize>,
}

/// Read `stem` as a prefix of the normalized token `chars`.
///
/// Diacritics are ignored on both sides; a stem digamma missing from the
/// token is recorded at the token offset where it belongs.
fn match_stem(chars: &[char], stem: &str) -> Option<StemMatch> {
    let mut pos = 0;
    let mut digammas = Vec::new();
    for s in stem.chars().filter(|&c| is_letter(c)) {
        while chars.get(pos).is_some_and(|&c| is_vowel_diacritic(c)) {
            pos += 1;
        }
        match chars.get(pos) {
            Some(&c) if c == s => pos += 1,
            _ if is_digamma(s) => digammas.push(pos),
            _ => return None,
        }
    }
    Some(StemMatch { end: pos, digammas })
}

/// Lengths of the vowels after the stem, completed by the ending rule.
///
/// The rule sees every token letter around the vowel, so consonants between
/// the stem and the ending (the ν of -νυμι, the σ of -σι) are not lost.
fn ending_lengths(
    chars: &[char],
    spans: &[Range<usize>],
    defaults: &[Length],
    rule: &dyn EndingRule,
    parse: &Parse,
) -> Vec<Length> {
    let letters_of = |range: Range<usize>| -> String {
        chars[range].iter().copied().filter(|&c| is_letter(c)).collect()
    };
    spans
        .iter()
        .zip(defaults)
        .map(|(span, &default)| {
            let vowels: Vec<char> = chars[span.clone()]
                .iter()
                .copied()
                .filter(|&c| is_vowel(c))
                .collect();
            if default != Length::Unknown || vowels.len() != 1 || !is_ambiguous_vowel(vowels[0]) {
                return default;
            }
            let before = letters_of(0..span.start);
            let after = letters_of(span.end..chars.len());
            rule.vowel_length(vowels[0], &before, &after, parse)
        })
        .collect()
}

/// Align a token against the lexicon stems of its parses.
///
/// `chars` is the normalized token, `spans` its vowel nuclei and `defaults`
/// the per-nucleus lengths from the letters alone.
pub fn align_token(
    chars: &[char],
    spans: &[Range<usize>],
    defaults: &[Length],
    parses: &[Parse],
    lexicon: &Lexicon,
) -> Result<Alignment, AlignmentMiss> {
    let token: String = chars.iter().collect();
    let mut found_entry = false;
    let mut candidates: Vec<(usize, Alignment)> = Vec::new();

    for parse in parses {
        let Some(entry) = lexicon.lookup(&parse.lemma) else {
            continue;
        };
        found_entry = true;
        let rule = rule_for(entry.class);
        for stem in entry.stems_for(parse.stem_slot()) {
            let Some(m) = match_stem(chars, stem.text()) else {
                continue;
            };
            let covered = spans.iter().take_while(|s| s.start < m.end).count();
            if covered != stem.lengths().len() {
                continue;
            }
            let mut lengths = stem.lengths().to_vec();
            lengths.extend(ending_lengths(
                chars,
                &spans[covered..],
                &defaults[covered..],
                rule,
                parse,
            ));
            candidates.push((
                m.end,
                Alignment {
                    lengths,
                    digammas: m.digammas,
                },
            ));
        }
    }

    if candidates.is_empty() {
        return Err(if found_entry {
            AlignmentMiss::StemMismatch(token)
        } else {
            AlignmentMiss::LookupMiss(token)
        });
    }

    let longest = candidates.iter().map(|(end, _)| *end).max().unwrap_or(0);
    candidates.retain(|(end, _)| *end == longest);
    if candidates.iter().any(|(_, a)| a.digammas.is_empty()) {
        candidates.retain(|(_, a)| a.digammas.is_empty());
    }

    let mut candidates = candidates.into_iter().map(|(_, a)| a);
    let mut merged = candidates
        .next()
        .ok_or_else(|| AlignmentMiss::StemMismatch(token.clone()))?;
    for other in candidates {
        for (mine, theirs) in merged.lengths.iter_mut().zip(&other.lengths) {
            *mine = mine.unify(*theirs);
        }
        merged.digammas.retain(|d| other.digammas.contains(d));
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexameter_core::character::nucleus_spans;
    use hexameter_core::enums::{Case, EndingClass, Number, PartOfSpeech, StemSlot};
    use hexameter_core::{LexiconEntry, Stem};
    use Length::{Long, Short, Unknown};

    fn align(token: &str, parses: &[Parse], lexicon: &Lexicon) -> Result<Alignment, AlignmentMiss> {
        let chars: Vec<char> = token.chars().collect();
        let spans = nucleus_spans(&chars);
        let defaults = vec![Unknown; spans.len()];
        align_token(&chars, &spans, &defaults, parses, lexicon)
    }

    fn entry(lemma: &str, class: EndingClass, slot: StemSlot, text: &str, lengths: &[Length]) -> LexiconEntry {
        LexiconEntry::new(lemma, class).with_stem(slot, Stem::new(text, lengths.to_vec()).unwrap())
    }

    fn noun(lemma: &str, case: Case, number: Number) -> Parse {
        Parse::new(lemma, PartOfSpeech::Noun)
            .with_case(case)
            .with_number(number)
    }

    #[test]
    fn stem_lengths_then_ending_rule() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(entry("qea/", EndingClass::FirstDeclension, StemSlot::Oblique, "qe", &[Short]));
        let parses = [noun("qea/", Case::Genitive, Number::Singular)];
        let a = align("qeas", &parses, &lexicon).unwrap();
        assert_eq!(a.lengths, vec![Short, Long]);
        assert!(a.digammas.is_empty());
    }

    #[test]
    fn missing_lemma_is_lookup_miss() {
        let lexicon = Lexicon::new();
        let parses = [Parse::new("a)/ra", PartOfSpeech::Particle)];
        assert_eq!(
            align("ara", &parses, &lexicon),
            Err(AlignmentMiss::LookupMiss("ara".to_string()))
        );
    }

    #[test]
    fn non_prefix_stem_is_mismatch() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(entry("a)/ra", EndingClass::Indeclinable, StemSlot::Invariant, "ar", &[Short]));
        let parses = [Parse::new("a)/ra", PartOfSpeech::Particle)];
        assert!(matches!(align("ira", &parses, &lexicon), Err(AlignmentMiss::StemMismatch(_))));
    }

    #[test]
    fn agreeing_parses_keep_lengths() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(entry("a", EndingClass::Indeclinable, StemSlot::Invariant, "kal", &[Short]));
        lexicon.insert(entry("b", EndingClass::Indeclinable, StemSlot::Invariant, "kal", &[Short]));
        let parses = [
            Parse::new("a", PartOfSpeech::Adverb),
            Parse::new("b", PartOfSpeech::Adverb),
        ];
        let a = align("kalws", &parses, &lexicon).unwrap();
        assert_eq!(a.lengths, vec![Short, Unknown]);
    }

    #[test]
    fn disagreeing_parses_yield_unknown() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(entry("a", EndingClass::Indeclinable, StemSlot::Invariant, "kal", &[Short]));
        lexicon.insert(entry("b", EndingClass::Indeclinable, StemSlot::Invariant, "kal", &[Long]));
        let parses = [
            Parse::new("a", PartOfSpeech::Adverb),
            Parse::new("b", PartOfSpeech::Adverb),
        ];
        let a = align("kalws", &parses, &lexicon).unwrap();
        assert_eq!(a.lengths[0], Unknown);
    }

    #[test]
    fn longest_stem_match_wins() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(entry("a", EndingClass::Indeclinable, StemSlot::Invariant, "k", &[]));
        lexicon.insert(entry("b", EndingClass::Indeclinable, StemSlot::Invariant, "kal", &[Long]));
        let parses = [
            Parse::new("a", PartOfSpeech::Adverb),
            Parse::new("b", PartOfSpeech::Adverb),
        ];
        let a = align("kala", &parses, &lexicon).unwrap();
        assert_eq!(a.lengths, vec![Long, Unknown]);
    }

    #[test]
    fn omitted_digamma_is_restored() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(entry("oi)=kos", EndingClass::SecondDeclension, StemSlot::Oblique, "voik", &[Long]));
        let parses = [noun("oi)=kos", Case::Accusative, Number::Singular)];
        let a = align("oikon", &parses, &lexicon).unwrap();
        assert_eq!(a.digammas, vec![0]);
        assert_eq!(a.lengths, vec![Long, Unknown]);
    }

    #[test]
    fn digamma_free_match_is_preferred() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(entry("a", EndingClass::Indeclinable, StemSlot::Invariant, "vid", &[Short]));
        lexicon.insert(entry("b", EndingClass::Indeclinable, StemSlot::Invariant, "id", &[Long]));
        let parses = [
            Parse::new("a", PartOfSpeech::Verb),
            Parse::new("b", PartOfSpeech::Verb),
        ];
        let a = align("ide", &parses, &lexicon).unwrap();
        assert!(a.digammas.is_empty());
        assert_eq!(a.lengths[0], Long);
    }

    #[test]
    fn nu_present_upsilon_is_long_with_or_without_nu_in_stem() {
        let parses = [Parse::new("dei/knumi", PartOfSpeech::Verb)];
        for stem in ["deik", "deikn"] {
            let mut lexicon = Lexicon::new();
            lexicon.insert(entry("dei/knumi", EndingClass::AthematicVerb, StemSlot::Present, stem, &[Long]));
            let a = align("deiknumi", &parses, &lexicon).unwrap();
            assert_eq!(a.lengths, vec![Long, Long, Short], "stem {stem}");
        }
    }

    #[test]
    fn mi_ending_iota_is_short() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(entry("ti/qhmi", EndingClass::AthematicVerb, StemSlot::Present, "tiqh", &[Short, Long]));
        let parses = [Parse::new("ti/qhmi", PartOfSpeech::Verb)];
        let a = align("tiqhmi", &parses, &lexicon).unwrap();
        assert_eq!(a.lengths, vec![Short, Long, Short]);
    }
}
