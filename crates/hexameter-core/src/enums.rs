// Shared enums: vowel/syllable length, grammatical categories, ending classes
// and stem slots.

use serde::{Deserialize, Serialize};

/// Quantity of a vowel or syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    Long,
    Short,
    /// Not derivable from the letters or the lexicon; resolved by the scanner.
    #[default]
    Unknown,
}

impl Length {
    /// Combine two independent determinations of the same vowel.
    ///
    /// Agreement keeps the value; any disagreement yields `Unknown`.
    pub fn unify(self, other: Length) -> Length {
        if self == other { self } else { Length::Unknown }
    }

    pub fn is_known(self) -> bool {
        self != Length::Unknown
    }
}

// ---------------------------------------------------------------------------
// Grammatical categories carried by a Parse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Pronoun,
    Article,
    Verb,
    Participle,
    Adverb,
    Preposition,
    Conjunction,
    Particle,
    Numeral,
    Interjection,
}

impl PartOfSpeech {
    /// Forms that decline for case: nouns, adjectives, pronouns, articles,
    /// participles and numerals.
    pub fn is_nominal(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun
                | PartOfSpeech::Adjective
                | PartOfSpeech::Pronoun
                | PartOfSpeech::Article
                | PartOfSpeech::Participle
                | PartOfSpeech::Numeral
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Vocative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Dual,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Imperfect,
    Future,
    Aorist,
    Perfect,
    Pluperfect,
    FuturePerfect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    Active,
    Middle,
    Passive,
    MiddlePassive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Optative,
    Imperative,
    Infinitive,
    Participle,
}

// ---------------------------------------------------------------------------
// Lexicon classification
// ---------------------------------------------------------------------------

/// Inflectional class of a lemma, as assigned by the dictionary classifier.
///
/// Decides how the vowel lengths of an ending are completed once the stem has
/// been aligned against a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndingClass {
    /// α/η-stems.
    FirstDeclension,
    /// ο-stems.
    SecondDeclension,
    /// Consonant and ι/υ-stems.
    ThirdDeclension,
    /// ω-verbs.
    ThematicVerb,
    /// μι-verbs.
    AthematicVerb,
    /// Particles, adverbs, prepositions and other uninflected words.
    Indeclinable,
}

impl EndingClass {
    pub const ALL: [EndingClass; 6] = [
        EndingClass::FirstDeclension,
        EndingClass::SecondDeclension,
        EndingClass::ThirdDeclension,
        EndingClass::ThematicVerb,
        EndingClass::AthematicVerb,
        EndingClass::Indeclinable,
    ];
}

/// The grammatical slot a stem belongs to.
///
/// Verbs have one slot per principal part; nominal forms distinguish the
/// nominative singular from the oblique stem (πούς vs. ποδ-).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemSlot {
    Present,
    Future,
    Aorist,
    Perfect,
    PerfectMiddle,
    AoristPassive,
    Nominative,
    Oblique,
    /// Single stem used for every form.
    Invariant,
}

impl StemSlot {
    pub const ALL: [StemSlot; 9] = [
        StemSlot::Present,
        StemSlot::Future,
        StemSlot::Aorist,
        StemSlot::Perfect,
        StemSlot::PerfectMiddle,
        StemSlot::AoristPassive,
        StemSlot::Nominative,
        StemSlot::Oblique,
        StemSlot::Invariant,
    ];
}
