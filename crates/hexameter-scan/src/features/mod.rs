// Metrical features of a scanned line
//
// Everything here is derived from a finished `ScannedLine`: foot types, word
// breaks relative to the feet, the licences recorded at finalization, and
// Meyer's laws. Clitic junctions are not word breaks.

use serde::Serialize;

use crate::scanner::{FootKind, ScannedLine};
use crate::syllable::{DigammaEffect, MuteLiquid, Outcome};

/// Feet 1-5, the ones that can be dactyl or spondee.
const OPEN_FEET: usize = 5;

/// Word break inside a foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Caesura {
    #[default]
    None,
    /// After the foot's first syllable.
    Masculine,
    /// Between the two shorts of a dactyl.
    Feminine,
    Both,
}

impl Caesura {
    fn new(masculine: bool, feminine: bool) -> Self {
        match (masculine, feminine) {
            (true, true) => Caesura::Both,
            (true, false) => Caesura::Masculine,
            (false, true) => Caesura::Feminine,
            (false, false) => Caesura::None,
        }
    }

    pub fn is_masculine(self) -> bool {
        matches!(self, Caesura::Masculine | Caesura::Both)
    }

    pub fn is_feminine(self) -> bool {
        matches!(self, Caesura::Feminine | Caesura::Both)
    }
}

/// The line's main caesura, by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalCaesura {
    #[serde(rename = "masculine_3")]
    Masculine3,
    #[serde(rename = "feminine_3")]
    Feminine3,
    #[serde(rename = "masculine_4")]
    Masculine4,
    None,
}

/// Longest notable spondee pattern across feet 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpondeeRun {
    /// S S D S S
    Ssdss,
    AllFive,
    FourInRow,
    ThreeInRow,
    TwoInRow,
    None,
}

impl SpondeeRun {
    fn classify(spondees: &[bool; OPEN_FEET]) -> Self {
        let longest = spondees
            .iter()
            .fold((0, 0), |(best, run), &s| {
                let run = if s { run + 1 } else { 0 };
                (best.max(run), run)
            })
            .0;
        if *spondees == [true, true, false, true, true] {
            return SpondeeRun::Ssdss;
        }
        match longest {
            5 => SpondeeRun::AllFive,
            4 => SpondeeRun::FourInRow,
            3 => SpondeeRun::ThreeInRow,
            2 => SpondeeRun::TwoInRow,
            _ => SpondeeRun::None,
        }
    }
}

/// Uses of a licence and chances to use it that were passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    pub happened: u32,
    pub declined: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Happened => self.happened += 1,
            Outcome::Declined => self.declined += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EventCounts {
    pub correption: Tally,
    pub mute_liquid: Tally,
    pub mute_nasal: Tally,
    pub mute_liquid_word_initial: Tally,
    pub digamma_hiatus: Tally,
    pub digamma_elision: Tally,
    pub digamma_closed: Tally,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IctusCounts {
    pub before_pause: u32,
    pub elsewhere: u32,
}

/// Meyer's laws; `true` means the line respects the law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeyerLaws {
    /// No word begun in foot 1 ends at the second trochee.
    pub first: bool,
    /// No iambic word before the masculine caesura of foot 3.
    pub second: bool,
    /// A principal caesura and no feminine break in foot 4.
    pub third: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFeatures {
    pub spondees: [bool; OPEN_FEET],
    pub spondee_run: SpondeeRun,
    pub caesurae: [Caesura; OPEN_FEET],
    pub principal_caesura: PrincipalCaesura,
    /// Word break after foot 1..=5.
    pub diaereses: [bool; OPEN_FEET],
    pub events: EventCounts,
    pub ictus: IctusCounts,
    pub meyer: MeyerLaws,
}

impl LineFeatures {
    pub fn from_scansion(line: &ScannedLine) -> Self {
        let syllables = line.syllables();
        let feet = line.feet();

        let mut spondees = [false; OPEN_FEET];
        let mut caesurae = [Caesura::None; OPEN_FEET];
        let mut diaereses = [false; OPEN_FEET];
        for (k, foot) in feet.iter().take(OPEN_FEET).enumerate() {
            spondees[k] = foot.kind == FootKind::Spondee;
            let masculine = syllables[foot.start].word_break_after();
            let feminine =
                foot.kind == FootKind::Dactyl && syllables[foot.start + 1].word_break_after();
            caesurae[k] = Caesura::new(masculine, feminine);
            diaereses[k] = syllables[foot.end() - 1].word_break_after();
        }

        let principal_caesura = if caesurae[2].is_masculine() {
            PrincipalCaesura::Masculine3
        } else if caesurae[2].is_feminine() {
            PrincipalCaesura::Feminine3
        } else if caesurae[3].is_masculine() {
            PrincipalCaesura::Masculine4
        } else {
            PrincipalCaesura::None
        };

        let second_foot_dactyl = feet.get(1).is_some_and(|f| f.kind == FootKind::Dactyl);
        let meyer = MeyerLaws {
            first: !(caesurae[1].is_feminine() && !caesurae[1].is_masculine() && !diaereses[0]),
            second: !(second_foot_dactyl
                && caesurae[1].is_feminine()
                && caesurae[2].is_masculine()),
            third: principal_caesura != PrincipalCaesura::None && !caesurae[3].is_feminine(),
        };

        let mut events = EventCounts::default();
        let mut ictus = IctusCounts::default();
        for syllable in syllables {
            if let Some(outcome) = syllable.events.correption {
                events.correption.record(outcome);
            }
            if let Some((kind, outcome)) = syllable.events.mute_liquid {
                match kind {
                    MuteLiquid::Liquid => events.mute_liquid.record(outcome),
                    MuteLiquid::Nasal => events.mute_nasal.record(outcome),
                    MuteLiquid::WordInitial => events.mute_liquid_word_initial.record(outcome),
                }
            }
            if let Some((effect, outcome)) = syllable.events.digamma {
                match effect {
                    DigammaEffect::Hiatus => events.digamma_hiatus.record(outcome),
                    DigammaEffect::Elision => events.digamma_elision.record(outcome),
                    DigammaEffect::Closed => events.digamma_closed.record(outcome),
                }
            }
            if syllable.ictus_lengthened {
                if syllable.pause_after() {
                    ictus.before_pause += 1;
                } else {
                    ictus.elsewhere += 1;
                }
            }
        }

        Self {
            spondees,
            spondee_run: SpondeeRun::classify(&spondees),
            caesurae,
            principal_caesura,
            diaereses,
            events,
            ictus,
            meyer,
        }
    }

    /// Number of spondees in feet 1-5.
    pub fn spondee_count(&self) -> usize {
        self.spondees.iter().filter(|&&s| s).count()
    }
}
