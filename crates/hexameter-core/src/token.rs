// Line, Token and Parse input types, and the per-form parse table

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::character::is_pause_mark;
use crate::enums::{Case, Gender, Mood, Number, PartOfSpeech, Person, StemSlot, Tense, Voice};

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

/// One verse line as delivered by the text collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Raw Beta Code text, tokens separated by whitespace.
    pub text: String,
    /// Line number within the book.
    pub number: u32,
    /// Book number.
    pub book: u32,
}

impl Line {
    pub fn new(text: impl Into<String>, number: u32, book: u32) -> Self {
        Self {
            text: text.into(),
            number,
            book,
        }
    }

    /// Whitespace-separated tokens of the line.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

// ---------------------------------------------------------------------------
// Parse
// ---------------------------------------------------------------------------

/// One candidate morphological analysis of a token.
///
/// Verbal forms fill tense/voice/mood/person/number; nominal forms fill
/// case/gender/number. Absent features are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parse {
    pub lemma: String,
    pub pos: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<Tense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl Parse {
    /// A parse with only lemma and part of speech set.
    pub fn new(lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
            tense: None,
            voice: None,
            mood: None,
            person: None,
            number: None,
            case: None,
            gender: None,
        }
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }

    pub fn with_number(mut self, number: Number) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_tense(mut self, tense: Tense) -> Self {
        self.tense = Some(tense);
        self
    }

    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.voice = Some(voice);
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }

    /// True for participles, whether tagged by part of speech or by mood.
    pub fn is_participle(&self) -> bool {
        self.pos == PartOfSpeech::Participle || self.mood == Some(Mood::Participle)
    }

    /// The stem slot this parse draws its stem from.
    ///
    /// Verbs select a principal part from tense and voice. Nominal forms use
    /// the nominative stem for the nominative/vocative singular (and the
    /// accusative singular of neuters), the oblique stem otherwise. Anything
    /// else uses the invariant stem.
    pub fn stem_slot(&self) -> StemSlot {
        if self.pos == PartOfSpeech::Verb || self.is_participle() {
            return verb_slot(self.tense, self.voice);
        }
        if self.pos.is_nominal() {
            let singular = matches!(self.number, None | Some(Number::Singular));
            let direct = match self.case {
                Some(Case::Nominative) | Some(Case::Vocative) => true,
                Some(Case::Accusative) => self.gender == Some(Gender::Neuter),
                _ => false,
            };
            return if singular && direct {
                StemSlot::Nominative
            } else {
                StemSlot::Oblique
            };
        }
        StemSlot::Invariant
    }
}

fn verb_slot(tense: Option<Tense>, voice: Option<Voice>) -> StemSlot {
    let passive = voice == Some(Voice::Passive);
    let mediopassive = matches!(voice, Some(Voice::Middle | Voice::Passive | Voice::MiddlePassive));
    match tense {
        None | Some(Tense::Present) | Some(Tense::Imperfect) => StemSlot::Present,
        Some(Tense::Future) if passive => StemSlot::AoristPassive,
        Some(Tense::Future) => StemSlot::Future,
        Some(Tense::Aorist) if passive => StemSlot::AoristPassive,
        Some(Tense::Aorist) => StemSlot::Aorist,
        Some(Tense::Perfect | Tense::Pluperfect | Tense::FuturePerfect) if mediopassive => {
            StemSlot::PerfectMiddle
        }
        Some(Tense::Perfect | Tense::Pluperfect | Tense::FuturePerfect) => StemSlot::Perfect,
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A word of a line together with its candidate parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub parses: &'a [Parse],
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, parses: &'a [Parse]) -> Self {
        Self { text, parses }
    }
}

// ---------------------------------------------------------------------------
// ParseTable
// ---------------------------------------------------------------------------

/// Candidate parses per unique token form.
///
/// Forms are keyed without trailing pause punctuation, so `mh=nin,` and
/// `mh=nin` share one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParseTable {
    forms: HashMap<String, Vec<Parse>>,
}

impl ParseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parse for a form. Parses accumulate in insertion order.
    pub fn insert(&mut self, form: &str, parse: Parse) {
        self.forms
            .entry(Self::key(form).to_string())
            .or_default()
            .push(parse);
    }

    /// Parses for a token; empty if the form is unknown.
    pub fn parses_for(&self, token: &str) -> &[Parse] {
        self.forms
            .get(Self::key(token))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pair every token of a line with its parses.
    pub fn tokens<'a>(&'a self, line: &'a Line) -> Vec<Token<'a>> {
        line.tokens()
            .map(|text| Token::new(text, self.parses_for(text)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    fn key(form: &str) -> &str {
        form.trim_end_matches(is_pause_mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_tokens_split_on_whitespace() {
        let line = Line::new("mh=nin a)/eide qea/  ", 1, 1);
        let tokens: Vec<&str> = line.tokens().collect();
        assert_eq!(tokens, vec!["mh=nin", "a)/eide", "qea/"]);
    }

    #[test]
    fn verb_slots_follow_tense_and_voice() {
        let p = Parse::new("lu/w", PartOfSpeech::Verb).with_tense(Tense::Aorist);
        assert_eq!(p.stem_slot(), StemSlot::Aorist);
        let p = p.with_voice(Voice::Passive);
        assert_eq!(p.stem_slot(), StemSlot::AoristPassive);
        let p = Parse::new("lu/w", PartOfSpeech::Verb)
            .with_tense(Tense::Perfect)
            .with_voice(Voice::MiddlePassive);
        assert_eq!(p.stem_slot(), StemSlot::PerfectMiddle);
        let p = Parse::new("lu/w", PartOfSpeech::Verb).with_tense(Tense::Imperfect);
        assert_eq!(p.stem_slot(), StemSlot::Present);
    }

    #[test]
    fn nominal_slots_follow_case() {
        let nom = Parse::new("pou/s", PartOfSpeech::Noun)
            .with_case(Case::Nominative)
            .with_number(Number::Singular);
        assert_eq!(nom.stem_slot(), StemSlot::Nominative);
        let gen_ = Parse::new("pou/s", PartOfSpeech::Noun)
            .with_case(Case::Genitive)
            .with_number(Number::Singular);
        assert_eq!(gen_.stem_slot(), StemSlot::Oblique);
        let nom_pl = Parse::new("pou/s", PartOfSpeech::Noun)
            .with_case(Case::Nominative)
            .with_number(Number::Plural);
        assert_eq!(nom_pl.stem_slot(), StemSlot::Oblique);
        let neut_acc = Parse::new("sw=ma", PartOfSpeech::Noun)
            .with_case(Case::Accusative)
            .with_gender(Gender::Neuter);
        assert_eq!(neut_acc.stem_slot(), StemSlot::Nominative);
    }

    #[test]
    fn participles_use_verb_slots() {
        let p = Parse::new("lu/w", PartOfSpeech::Participle)
            .with_tense(Tense::Aorist)
            .with_case(Case::Nominative);
        assert!(p.is_participle());
        assert_eq!(p.stem_slot(), StemSlot::Aorist);
    }

    #[test]
    fn particles_are_invariant() {
        let p = Parse::new("de/", PartOfSpeech::Particle);
        assert_eq!(p.stem_slot(), StemSlot::Invariant);
    }

    #[test]
    fn parse_table_ignores_trailing_punctuation() {
        let mut table = ParseTable::new();
        table.insert("mh=nin", Parse::new("mh=nis", PartOfSpeech::Noun));
        assert_eq!(table.parses_for("mh=nin,").len(), 1);
        assert_eq!(table.parses_for("mh=nin").len(), 1);
        assert!(table.parses_for("qea/").is_empty());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn parse_table_pairs_tokens() {
        let mut table = ParseTable::new();
        table.insert("qea/", Parse::new("qea/", PartOfSpeech::Noun));
        let line = Line::new("a)/eide qea/,", 1, 1);
        let tokens = table.tokens(&line);
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].parses.is_empty());
        assert_eq!(tokens[1].parses[0].lemma, "qea/");
    }

    #[test]
    fn parse_deserializes_with_missing_features() {
        let p: Parse =
            serde_json::from_str(r#"{"lemma":"qea/","pos":"noun","case":"vocative"}"#).unwrap();
        assert_eq!(p.case, Some(Case::Vocative));
        assert_eq!(p.tense, None);
    }
}
