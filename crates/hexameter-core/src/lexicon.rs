// Lexicon: stems with per-vowel length tags, keyed by lemma
//
// Entries are produced by the external dictionary classifier. The lexicon
// keeps a second, hand-curated override table; a lemma found there shadows
// the classifier's entry completely.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::character::{normalize, nucleus_spans};
use crate::enums::{EndingClass, Length, StemSlot};

/// Errors raised while building lexicon data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    /// The length array does not have one tag per vowel nucleus of the stem.
    #[error("stem {stem:?} has {nuclei} vowel nuclei but {tags} length tags")]
    LengthMismatch {
        stem: String,
        nuclei: usize,
        tags: usize,
    },

    /// A stem without any letters.
    #[error("stem {0:?} has no letters")]
    EmptyStem(String),
}

// ---------------------------------------------------------------------------
// Stem
// ---------------------------------------------------------------------------

/// A stem in normalized Beta Code with one length tag per vowel nucleus.
///
/// The stem may contain the digamma placeholder `v`, which a token is allowed
/// to omit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StemRecord", into = "StemRecord")]
pub struct Stem {
    text: String,
    lengths: Vec<Length>,
}

#[derive(Serialize, Deserialize)]
struct StemRecord {
    text: String,
    lengths: Vec<Length>,
}

impl Stem {
    /// Build a stem, checking the length array against the stem's nuclei.
    pub fn new(text: &str, lengths: Vec<Length>) -> Result<Self, LexiconError> {
        let text = normalize(text);
        if text.is_empty() {
            return Err(LexiconError::EmptyStem(text));
        }
        let chars: Vec<char> = text.chars().collect();
        let nuclei = nucleus_spans(&chars).len();
        if nuclei != lengths.len() {
            return Err(LexiconError::LengthMismatch {
                stem: text,
                nuclei,
                tags: lengths.len(),
            });
        }
        Ok(Self { text, lengths })
    }

    /// Normalized stem text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length tag per vowel nucleus, in order.
    pub fn lengths(&self) -> &[Length] {
        &self.lengths
    }
}

impl TryFrom<StemRecord> for Stem {
    type Error = LexiconError;

    fn try_from(record: StemRecord) -> Result<Self, Self::Error> {
        Stem::new(&record.text, record.lengths)
    }
}

impl From<Stem> for StemRecord {
    fn from(stem: Stem) -> Self {
        StemRecord {
            text: stem.text,
            lengths: stem.lengths,
        }
    }
}

// ---------------------------------------------------------------------------
// LexiconEntry
// ---------------------------------------------------------------------------

/// Stem and ending-class information for one lemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub lemma: String,
    pub class: EndingClass,
    #[serde(default)]
    pub stems: HashMap<StemSlot, Vec<Stem>>,
}

impl LexiconEntry {
    pub fn new(lemma: impl Into<String>, class: EndingClass) -> Self {
        Self {
            lemma: lemma.into(),
            class,
            stems: HashMap::new(),
        }
    }

    /// Add a stem to a slot.
    pub fn with_stem(mut self, slot: StemSlot, stem: Stem) -> Self {
        self.stems.entry(slot).or_default().push(stem);
        self
    }

    /// Stems usable for a slot.
    ///
    /// Falls back to the invariant stem, then to every stem of the entry in
    /// slot order, so a sparsely classified lemma still gets a chance to align.
    pub fn stems_for(&self, slot: StemSlot) -> Vec<&Stem> {
        for wanted in [slot, StemSlot::Invariant] {
            if let Some(stems) = self.stems.get(&wanted).filter(|s| !s.is_empty()) {
                return stems.iter().collect();
            }
        }
        StemSlot::ALL
            .iter()
            .filter_map(|s| self.stems.get(s))
            .flatten()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// Lemma-keyed lexicon with an override table consulted first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LexiconFile", into = "LexiconFile")]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    overrides: HashMap<String, LexiconEntry>,
}

#[derive(Default, Serialize, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    entries: Vec<LexiconEntry>,
    #[serde(default)]
    overrides: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a classifier entry.
    pub fn insert(&mut self, entry: LexiconEntry) {
        self.entries.insert(entry.lemma.clone(), entry);
    }

    /// Insert or replace a hand-curated override.
    pub fn insert_override(&mut self, entry: LexiconEntry) {
        self.overrides.insert(entry.lemma.clone(), entry);
    }

    /// Look a lemma up; an override wins over the classifier entry.
    pub fn lookup(&self, lemma: &str) -> Option<&LexiconEntry> {
        self.overrides
            .get(lemma)
            .or_else(|| self.entries.get(lemma))
    }

    /// Number of distinct lemmas covered by entries or overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
            + self
                .overrides
                .keys()
                .filter(|k| !self.entries.contains_key(*k))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.overrides.is_empty()
    }
}

impl From<LexiconFile> for Lexicon {
    fn from(file: LexiconFile) -> Self {
        let mut lexicon = Lexicon::new();
        for entry in file.entries {
            lexicon.insert(entry);
        }
        for entry in file.overrides {
            lexicon.insert_override(entry);
        }
        lexicon
    }
}

impl From<Lexicon> for LexiconFile {
    fn from(lexicon: Lexicon) -> Self {
        let mut entries: Vec<LexiconEntry> = lexicon.entries.into_values().collect();
        let mut overrides: Vec<LexiconEntry> = lexicon.overrides.into_values().collect();
        entries.sort_by(|a, b| a.lemma.cmp(&b.lemma));
        overrides.sort_by(|a, b| a.lemma.cmp(&b.lemma));
        LexiconFile { entries, overrides }
    }
}
