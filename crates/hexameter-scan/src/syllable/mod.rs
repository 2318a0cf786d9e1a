// Syllables: syllabification, contraction and length assignment
//
// A syllable is onset + nucleus + coda plus the flags the scanner needs to
// decide its quantity: what follows it across a word boundary (correption,
// digamma hiatus) and what consonant cluster follows it (double consonant,
// mute + liquid, consonant + digamma).

pub mod contraction;
pub mod length;
pub mod syllabify;

use std::fmt;

use hexameter_core::enums::Length;
use serde::Serialize;

use crate::phonology::{Boundary, BoundaryKind, Vowel};

pub use contraction::{ContractionLevel, contract};
pub use length::assign_lengths;
pub use syllabify::syllabify;

/// A double consonant after the syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoubleConsonant {
    /// Closes the syllable.
    Closing,
    /// Word-initial ζ, which may leave a short vowel short.
    PossiblyShort,
}

/// A mute + liquid/nasal cluster after the syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MuteLiquid {
    /// Mute + λ/ρ inside a word.
    Liquid,
    /// Mute + μ/ν inside a word.
    Nasal,
    /// The cluster begins the next word.
    WordInitial,
}

/// The way a restored digamma acted on the syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DigammaEffect {
    /// A long final vowel before a digamma word (no correption).
    Hiatus,
    /// A short final vowel before a digamma word (no elision).
    Elision,
    /// Consonant + digamma closing the syllable.
    Closed,
}

/// Whether an optional prosodic licence was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Happened,
    Declined,
}

/// Metrical events recorded on a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Events {
    pub correption: Option<Outcome>,
    pub mute_liquid: Option<(MuteLiquid, Outcome)>,
    pub digamma: Option<(DigammaEffect, Outcome)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub onset: String,
    pub nucleus: Vowel,
    pub coda: String,
    /// Index of the word the nucleus belongs to.
    pub word: usize,
    /// Syllable quantity; `Unknown` until assigned or resolved.
    pub length: Length,

    /// The nucleus is the last vowel of its word.
    pub last_in_word: bool,
    /// The nucleus is the last phoneme of its word.
    pub word_final_vowel: bool,
    /// The junction after the word, for the last syllable of a word that is
    /// not line-final.
    pub boundary: Option<Boundary>,
    /// Word-final vowel before a vowel-initial word.
    pub correption_candidate: bool,
    /// Word-final vowel before a digamma-initial word.
    pub hiatus_by_digamma: bool,

    pub double_consonant_next: Option<DoubleConsonant>,
    pub mute_liquid_next: Option<MuteLiquid>,
    /// Followed by consonant + digamma (or digamma + consonant).
    pub closed_by_digamma: bool,

    pub ictus_lengthened: bool,
    pub events: Events,
}

impl Syllable {
    pub fn new(onset: &str, nucleus: Vowel, coda: &str) -> Self {
        Self {
            onset: onset.to_string(),
            nucleus,
            coda: coda.to_string(),
            word: 0,
            length: Length::Unknown,
            last_in_word: false,
            word_final_vowel: false,
            boundary: None,
            correption_candidate: false,
            hiatus_by_digamma: false,
            double_consonant_next: None,
            mute_liquid_next: None,
            closed_by_digamma: false,
            ictus_lengthened: false,
            events: Events::default(),
        }
    }

    pub fn pause_after(&self) -> bool {
        self.boundary.is_some_and(|b| b.pause)
    }

    /// A metrical word break follows; clitic junctions do not count.
    pub fn word_break_after(&self) -> bool {
        self.boundary.is_some_and(|b| b.kind == BoundaryKind::Word)
    }

    /// A long open nucleus that may be shortened before a following vowel.
    pub fn is_correptible(&self) -> bool {
        (self.correption_candidate || self.hiatus_by_digamma)
            && self.coda.is_empty()
            && self.nucleus.length == Length::Long
    }

    /// Closed only by the mute of a mute + liquid cluster, over a vowel that
    /// is not long by nature.
    pub fn mute_liquid_licensed(&self) -> bool {
        self.mute_liquid_next.is_some()
            && self.coda.chars().count() == 1
            && self.nucleus.length != Length::Long
    }

    /// A short syllable ending a word.
    pub fn ictus_eligible(&self) -> bool {
        self.last_in_word && self.length == Length::Short
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.onset, self.nucleus.letters, self.nucleus.diacritics, self.coda
        )
    }
}
