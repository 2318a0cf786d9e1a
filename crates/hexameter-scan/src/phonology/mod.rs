// Phoneme segmentation
//
// Turns the tokens of a line into a flat phoneme sequence: vowel nuclei with
// a tentative length, consonants, restored digammas, and word boundaries that
// remember pauses, elisions and clitic attachment.
//
// Vowel lengths come from the letters first (η ω long, ε ο short, diphthongs
// and marked vowels as marked). Tokens with an ambiguous vowel, and
// vowel-initial tokens that may have lost an initial digamma, are aligned
// against the lexicon; a miss is logged and the defaults stand.

pub mod alignment;
pub mod clitics;
pub mod endings;

use std::ops::Range;

use hexameter_core::character::{
    BREVE, CIRCUMFLEX, IOTA_SUBSCRIPT, MACRON, ends_with_pause, is_digamma, is_elided,
    is_long_vowel, is_short_vowel, is_vowel, is_vowel_diacritic, normalize, nucleus_spans,
};
use hexameter_core::enums::Length;
use hexameter_core::{Lexicon, Token};

use self::alignment::align_token;
pub use self::alignment::AlignmentMiss;
use self::clitics::{CliticKind, classify};

// ---------------------------------------------------------------------------
// Phoneme
// ---------------------------------------------------------------------------

/// A vowel nucleus: one vowel or a diphthong, with its diacritics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vowel {
    /// Vowel letters of the nucleus.
    pub letters: String,
    /// Diacritics kept on the nucleus (`+ | = _ ^`).
    pub diacritics: String,
    pub length: Length,
    /// Produced by merging two vowels (synizesis).
    pub contracted: bool,
}

impl Vowel {
    pub fn new(letters: &str, diacritics: &str, length: Length) -> Self {
        Self {
            letters: letters.to_string(),
            diacritics: diacritics.to_string(),
            length,
            contracted: false,
        }
    }

    pub fn is_diphthong(&self) -> bool {
        self.letters.len() > 1
    }

    pub fn has_diacritic(&self, mark: char) -> bool {
        self.diacritics.contains(mark)
    }
}

/// How tightly two adjacent words are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    /// An ordinary word break.
    Word,
    /// A clitic and its host: a word junction but not a metrical break.
    Clitic,
}

/// The junction between two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub kind: BoundaryKind,
    /// Punctuation after the preceding word.
    pub pause: bool,
    /// The preceding word lost its final vowel.
    pub elided: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phoneme {
    Vowel(Vowel),
    Consonant(char),
    /// A restored digamma; it counts as a consonant.
    Digamma,
    Boundary(Boundary),
}

impl Phoneme {
    pub fn as_vowel(&self) -> Option<&Vowel> {
        match self {
            Phoneme::Vowel(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, Phoneme::Boundary(_))
    }
}

// ---------------------------------------------------------------------------
// Segmentation
// ---------------------------------------------------------------------------

/// Length of a nucleus from its letters and diacritics alone.
pub fn default_length(letters: &[char], diacritics: &[char]) -> Length {
    let marked = |mark| diacritics.contains(&mark);
    if marked(CIRCUMFLEX) || marked(IOTA_SUBSCRIPT) || marked(MACRON) {
        return Length::Long;
    }
    if marked(BREVE) {
        return Length::Short;
    }
    match letters {
        [_, _] => Length::Long,
        [c] if is_long_vowel(*c) => Length::Long,
        [c] if is_short_vowel(*c) => Length::Short,
        _ => Length::Unknown,
    }
}

fn split_nucleus(chars: &[char], span: &Range<usize>) -> (Vec<char>, Vec<char>) {
    chars[span.clone()]
        .iter()
        .copied()
        .partition(|&c| is_vowel(c))
}

/// Segment one token into phonemes, consulting the lexicon where needed.
pub fn segment_token(token: &Token<'_>, lexicon: &Lexicon) -> Vec<Phoneme> {
    let chars: Vec<char> = normalize(token.text).chars().collect();
    let spans = nucleus_spans(&chars);
    let defaults: Vec<Length> = spans
        .iter()
        .map(|span| {
            let (letters, diacritics) = split_nucleus(&chars, span);
            default_length(&letters, &diacritics)
        })
        .collect();

    let needs_alignment = defaults.contains(&Length::Unknown)
        || chars.first().is_some_and(|&c| is_vowel(c));
    let mut lengths = defaults.clone();
    let mut digammas = Vec::new();
    if needs_alignment && !token.parses.is_empty() {
        match align_token(&chars, &spans, &defaults, token.parses, lexicon) {
            Ok(alignment) => {
                for (length, aligned) in lengths.iter_mut().zip(alignment.lengths) {
                    if *length == Length::Unknown {
                        *length = aligned;
                    }
                }
                digammas = alignment.digammas;
            }
            Err(miss) => tracing::debug!(token = token.text, %miss, "alignment fell back to defaults"),
        }
    }

    let mut phonemes = Vec::with_capacity(chars.len() + digammas.len());
    let mut nuclei = spans.iter().zip(&lengths).peekable();
    let mut i = 0;
    while i < chars.len() {
        if digammas.contains(&i) {
            phonemes.push(Phoneme::Digamma);
        }
        if let Some((span, &length)) = nuclei.next_if(|(span, _)| span.start == i) {
            let (letters, diacritics) = split_nucleus(&chars, span);
            let letters: String = letters.into_iter().collect();
            let diacritics: String = diacritics.into_iter().collect();
            phonemes.push(Phoneme::Vowel(Vowel::new(&letters, &diacritics, length)));
            i = span.end;
            continue;
        }
        let c = chars[i];
        if is_digamma(c) {
            phonemes.push(Phoneme::Digamma);
        } else if !is_vowel_diacritic(c) {
            phonemes.push(Phoneme::Consonant(c));
        }
        i += 1;
    }
    if digammas.contains(&chars.len()) {
        phonemes.push(Phoneme::Digamma);
    }
    phonemes
}

/// Segment a whole line.
///
/// Tokens without letters (stray punctuation) are dropped; their pause is
/// carried over to the preceding word. When `resolve_clitics` is false every
/// junction is an ordinary word break.
pub fn segment_line(tokens: &[Token<'_>], lexicon: &Lexicon, resolve_clitics: bool) -> Vec<Phoneme> {
    let mut phonemes = Vec::new();
    let mut previous: Option<CliticKind> = None;

    for token in tokens {
        let segment = segment_token(token, lexicon);
        if segment.is_empty() {
            if let Some(Phoneme::Boundary(b)) = phonemes.last_mut() {
                b.pause |= ends_with_pause(token.text);
            }
            continue;
        }
        let kind = if resolve_clitics {
            classify(token)
        } else {
            CliticKind::Ordinary
        };
        if let Some(Phoneme::Boundary(b)) = phonemes.last_mut() {
            let leaning = previous == Some(CliticKind::Proclitic) || kind == CliticKind::Enclitic;
            if leaning && !b.pause {
                b.kind = BoundaryKind::Clitic;
            }
        }
        phonemes.extend(segment);
        phonemes.push(Phoneme::Boundary(Boundary {
            kind: BoundaryKind::Word,
            pause: ends_with_pause(token.text),
            elided: is_elided(token.text),
        }));
        previous = Some(kind);
    }

    if phonemes.last().is_some_and(Phoneme::is_boundary) {
        phonemes.pop();
    }
    phonemes
}
