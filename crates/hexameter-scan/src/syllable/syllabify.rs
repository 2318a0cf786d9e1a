// Syllabification
//
// First pass: group the phoneme stream into units of (consonant run, vowel),
// noting word membership and what follows each vowel across a boundary.
// Second pass: split each consonant run between the coda of the preceding
// syllable and the onset of the next one.

use std::mem;

use hexameter_core::Length;
use hexameter_core::character::{DIGAMMA, is_double_consonant, is_liquid, is_mute, is_nasal};

use super::{DigammaEffect, DoubleConsonant, MuteLiquid, Outcome, Syllable};
use crate::phonology::{Boundary, BoundaryKind, Phoneme, Vowel};

#[derive(Debug, Clone, Copy)]
struct Consonant {
    ch: char,
    word_initial: bool,
    digamma: bool,
}

#[derive(Debug)]
struct Unit {
    onset: Vec<Consonant>,
    vowel: Vowel,
    word: usize,
    word_final_vowel: bool,
    boundary: Option<Boundary>,
    correption_candidate: bool,
    hiatus_by_digamma: bool,
    digamma_event: Option<(DigammaEffect, Outcome)>,
}

fn merge_boundary(current: Option<Boundary>, next: Boundary) -> Boundary {
    match current {
        None => next,
        Some(b) => Boundary {
            kind: if b.kind == BoundaryKind::Word || next.kind == BoundaryKind::Word {
                BoundaryKind::Word
            } else {
                BoundaryKind::Clitic
            },
            pause: b.pause || next.pause,
            elided: next.elided,
        },
    }
}

fn group_units(phonemes: &[Phoneme]) -> (Vec<Unit>, Vec<Consonant>) {
    let mut units: Vec<Unit> = Vec::new();
    let mut pending: Vec<Consonant> = Vec::new();
    let mut word = 0;
    let mut word_start = true;
    let mut previous_boundary: Option<Boundary> = None;

    for (i, phoneme) in phonemes.iter().enumerate() {
        match phoneme {
            Phoneme::Boundary(b) => {
                if let Some(unit) = units.last_mut() {
                    unit.boundary = Some(merge_boundary(unit.boundary, *b));
                }
                word += 1;
                word_start = true;
                previous_boundary = Some(*b);
            }
            Phoneme::Consonant(c) => {
                pending.push(Consonant {
                    ch: *c,
                    word_initial: word_start,
                    digamma: false,
                });
                word_start = false;
            }
            Phoneme::Digamma => {
                let after_elision = previous_boundary.is_some_and(|b| b.elided);
                if word_start && after_elision {
                    // The elided word ignores the digamma.
                    if let Some(unit) = units.last_mut() {
                        unit.digamma_event = Some((DigammaEffect::Elision, Outcome::Declined));
                    }
                    continue;
                }
                if word_start && pending.is_empty() {
                    if let Some(unit) = units.last_mut().filter(|u| u.word_final_vowel) {
                        unit.hiatus_by_digamma = true;
                        if unit.vowel.length == Length::Short {
                            unit.digamma_event = Some((DigammaEffect::Elision, Outcome::Happened));
                        }
                    }
                }
                pending.push(Consonant {
                    ch: DIGAMMA,
                    word_initial: word_start,
                    digamma: true,
                });
                word_start = false;
            }
            Phoneme::Vowel(vowel) => {
                if word_start && pending.is_empty() {
                    if let Some(unit) = units.last_mut().filter(|u| u.word_final_vowel) {
                        unit.correption_candidate = true;
                    }
                }
                units.push(Unit {
                    onset: mem::take(&mut pending),
                    vowel: vowel.clone(),
                    word,
                    word_final_vowel: matches!(phonemes.get(i + 1), Some(Phoneme::Boundary(_))),
                    boundary: None,
                    correption_candidate: false,
                    hiatus_by_digamma: false,
                    digamma_event: None,
                });
                word_start = false;
            }
        }
    }
    (units, pending)
}

/// How a consonant run between two nuclei is divided.
#[derive(Debug, Default)]
struct Split {
    coda: usize,
    double: Option<DoubleConsonant>,
    mute_liquid: Option<MuteLiquid>,
    closed_by_digamma: bool,
}

fn split_run(run: &[Consonant]) -> Split {
    match run {
        [] => Split::default(),
        [single] => Split {
            double: is_double_consonant(single.ch).then(|| {
                if single.ch == 'z' && single.word_initial {
                    DoubleConsonant::PossiblyShort
                } else {
                    DoubleConsonant::Closing
                }
            }),
            ..Split::default()
        },
        [a, b] if a.digamma || b.digamma => Split {
            closed_by_digamma: true,
            ..Split::default()
        },
        [mute, liquid] if is_mute(mute.ch) && (is_liquid(liquid.ch) || is_nasal(liquid.ch)) => {
            let kind = if mute.word_initial {
                Some(MuteLiquid::WordInitial)
            } else if liquid.word_initial {
                None
            } else if is_liquid(liquid.ch) {
                Some(MuteLiquid::Liquid)
            } else {
                Some(MuteLiquid::Nasal)
            };
            Split {
                coda: 1,
                mute_liquid: kind,
                ..Split::default()
            }
        }
        _ => Split {
            coda: 1,
            ..Split::default()
        },
    }
}

fn text(consonants: &[Consonant]) -> String {
    consonants.iter().map(|c| c.ch).collect()
}

/// Split a phoneme sequence into syllables. Lengths stay `Unknown`.
pub fn syllabify(phonemes: &[Phoneme]) -> Vec<Syllable> {
    let (units, trailing) = group_units(phonemes);
    let mut syllables = Vec::with_capacity(units.len());
    let mut taken = 0;

    for (i, unit) in units.iter().enumerate() {
        let next = units.get(i + 1);
        let split = match next {
            Some(next) => split_run(&next.onset),
            None => Split {
                coda: trailing.len(),
                ..Split::default()
            },
        };
        let coda = match next {
            Some(next) => text(&next.onset[..split.coda]),
            None => text(&trailing),
        };

        let mut syllable = Syllable::new(&text(&unit.onset[taken..]), unit.vowel.clone(), &coda);
        syllable.word = unit.word;
        syllable.last_in_word = next.is_none_or(|n| n.word != unit.word);
        syllable.word_final_vowel = unit.word_final_vowel;
        syllable.boundary = unit.boundary;
        syllable.correption_candidate = unit.correption_candidate;
        syllable.hiatus_by_digamma = unit.hiatus_by_digamma;
        syllable.double_consonant_next = split.double;
        syllable.mute_liquid_next = split.mute_liquid;
        syllable.closed_by_digamma = split.closed_by_digamma;
        syllable.events.digamma = unit.digamma_event;
        syllables.push(syllable);

        taken = split.coda;
    }
    syllables
}
