// Scanner: multi-pass foot matching over a syllable list
//
// Each pass syllabifies the line with the contractions it allows, assigns
// lengths, and enumerates the foot sequences the syllables admit under the
// pass's relaxations. The first pass with exactly one candidate wins; a pass
// with several candidates ends the search as ambiguous.

pub mod finalize;
pub mod search;

use std::fmt;

use hexameter_core::enums::Length;
use serde::Serialize;

use crate::phonology::Phoneme;
use crate::syllable::{ContractionLevel, Syllable, assign_lengths, contract, syllabify};

pub use finalize::finalize;
pub use search::Candidates;

/// Number of feet in a line.
pub const FEET: usize = 6;

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

/// A scanner pass, 1 through 5. Later passes allow more licences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Pass(u8);

/// Licences a pass allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relaxations {
    pub mute_liquid: bool,
    pub ictus: bool,
    pub contraction: ContractionLevel,
}

impl Pass {
    pub const FIRST: Pass = Pass(1);
    pub const LAST: Pass = Pass(5);

    /// `None` outside 1..=5.
    pub fn new(number: u8) -> Option<Pass> {
        (Self::FIRST.0..=Self::LAST.0)
            .contains(&number)
            .then_some(Pass(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Passes from the first through `self`.
    pub fn up_to(self) -> impl Iterator<Item = Pass> {
        (Self::FIRST.0..=self.0).map(Pass)
    }

    pub fn relaxations(self) -> Relaxations {
        let (mute_liquid, ictus, contraction) = match self.0 {
            1 => (false, false, ContractionLevel::None),
            2 => (true, false, ContractionLevel::Basic),
            3 => (false, true, ContractionLevel::Basic),
            4 => (true, true, ContractionLevel::Basic),
            _ => (true, true, ContractionLevel::Extended),
        };
        Relaxations {
            mute_liquid,
            ictus,
            contraction,
        }
    }
}

impl Default for Pass {
    fn default() -> Self {
        Pass::LAST
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Feet
// ---------------------------------------------------------------------------

/// Metrical position inside a foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Long,
    Short,
    /// The line's last syllable: either quantity.
    Anceps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FootKind {
    Dactyl,
    Spondee,
    Final,
}

impl FootKind {
    pub fn positions(self) -> &'static [Position] {
        match self {
            FootKind::Dactyl => &[Position::Long, Position::Short, Position::Short],
            FootKind::Spondee => &[Position::Long, Position::Long],
            FootKind::Final => &[Position::Long, Position::Anceps],
        }
    }

    pub fn span(self) -> usize {
        self.positions().len()
    }

    pub fn symbol(self) -> char {
        match self {
            FootKind::Dactyl => 'D',
            FootKind::Spondee => 'S',
            FootKind::Final => 'F',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Foot {
    pub kind: FootKind,
    /// Index of the foot's first syllable.
    pub start: usize,
}

impl Foot {
    pub fn new(kind: FootKind, start: usize) -> Self {
        Self { kind, start }
    }

    /// One past the foot's last syllable.
    pub fn end(&self) -> usize {
        self.start + self.kind.span()
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Why a line has no scansion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScansionFailure {
    #[error("no scansion through pass {last_pass}")]
    Exhausted { last_pass: Pass },

    #[error("{candidates} candidate scansions at pass {pass}")]
    Ambiguous { pass: Pass, candidates: usize },
}

/// A line divided into six feet with every syllable committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    syllables: Vec<Syllable>,
    feet: Vec<Foot>,
    pass: Pass,
}

impl ScannedLine {
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn feet(&self) -> &[Foot] {
        &self.feet
    }

    /// The pass that produced the scansion.
    pub fn pass(&self) -> Pass {
        self.pass
    }

    pub fn foot_syllables(&self, foot: &Foot) -> &[Syllable] {
        &self.syllables[foot.start..foot.end()]
    }

    /// Foot letters, e.g. `DDSDDF`.
    pub fn notation(&self) -> String {
        self.feet.iter().map(|f| f.kind.symbol()).collect()
    }

    /// Quantity marks per foot, e.g. `-uu|--|...|-x`.
    pub fn marks(&self) -> String {
        self.join_feet(|s| match s.length {
            Length::Long => "-".to_string(),
            Length::Short => "u".to_string(),
            Length::Unknown => "x".to_string(),
        }, "")
    }

    fn join_feet(&self, render: impl Fn(&Syllable) -> String, separator: &str) -> String {
        self.feet
            .iter()
            .map(|foot| {
                self.foot_syllables(foot)
                    .iter()
                    .map(&render)
                    .collect::<Vec<_>>()
                    .join(separator)
            })
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Dotted syllables with foot bars, e.g. `mh=.ni.na|ei.de.qe|...`.
impl fmt::Display for ScannedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join_feet(ToString::to_string, "."))
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Syllables of a line as a pass sees them.
pub fn prepare(phonemes: &[Phoneme], contraction: ContractionLevel) -> Vec<Syllable> {
    let mut syllables = syllabify(&contract(phonemes, contraction));
    assign_lengths(&mut syllables);
    syllables
}

/// Scan a line, trying passes 1 through `last_pass` in order.
pub fn scan(phonemes: &[Phoneme], last_pass: Pass) -> Result<ScannedLine, ScansionFailure> {
    for pass in last_pass.up_to() {
        let syllables = prepare(phonemes, pass.relaxations().contraction);
        let mut candidates = Candidates::new(&syllables, pass.relaxations());
        let Some(feet) = candidates.next() else {
            tracing::trace!(pass = pass.number(), syllables = syllables.len(), "no candidate");
            continue;
        };
        if candidates.next().is_some() {
            let count = 2 + candidates.count();
            tracing::debug!(pass = pass.number(), candidates = count, "ambiguous scansion");
            return Err(ScansionFailure::Ambiguous {
                pass,
                candidates: count,
            });
        }
        tracing::debug!(pass = pass.number(), "unique scansion");
        return Ok(finalize(syllables, feet, pass));
    }
    Err(ScansionFailure::Exhausted { last_pass })
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

    #[test]
    fn pass_table() {
        assert_eq!(Pass::new(0), None);
        assert_eq!(Pass::new(6), None);
        let r = Pass::FIRST.relaxations();
        assert!(!r.mute_liquid && !r.ictus);
        assert_eq!(r.contraction, ContractionLevel::None);
        let r = Pass::new(2).unwrap().relaxations();
        assert!(r.mute_liquid && !r.ictus);
        assert_eq!(r.contraction, ContractionLevel::Basic);
        let r = Pass::new(3).unwrap().relaxations();
        assert!(!r.mute_liquid && r.ictus);
        let r = Pass::LAST.relaxations();
        assert!(r.mute_liquid && r.ictus);
        assert_eq!(r.contraction, ContractionLevel::Extended);
        assert_eq!(Pass::new(3).unwrap().up_to().count(), 3);
    }

    #[test]
    fn iliad_one_needs_synizesis() {
        let line = phonemes("mh=nin a)/eide qea\\ *phlhi+a/dew *)axilh=os");
        assert_eq!(
            scan(&line, Pass::FIRST),
            Err(ScansionFailure::Exhausted {
                last_pass: Pass::FIRST
            })
        );
        let scanned = scan(&line, Pass::LAST).unwrap();
        assert_eq!(scanned.pass(), Pass::new(2).unwrap());
        assert_eq!(scanned.notation(), "DDSDDF");
        assert_eq!(scanned.marks(), "-uu|-uu|--|-uu|-uu|--");
        assert_eq!(
            scanned.to_string(),
            "mh=.ni.na|ei.de.qe|a.ph|lh.i+.a|dew.a.xi|lh.os"
        );
    }

    #[test]
    fn too_few_syllables_exhausts() {
        let line = phonemes("mh=nin a)/eide");
        assert!(matches!(
            scan(&line, Pass::LAST),
            Err(ScansionFailure::Exhausted { .. })
        ));
    }

    #[test]
    fn all_unknown_line_is_ambiguous() {
        // fourteen open syllables of unknown quantity
        let line = phonemes("ka ta ka ta ka ta ka ta ka ta ka ta ka ta");
        match scan(&line, Pass::LAST) {
            Err(ScansionFailure::Ambiguous { pass, candidates }) => {
                assert_eq!(pass, Pass::FIRST);
                assert!(candidates > 1);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }
}
