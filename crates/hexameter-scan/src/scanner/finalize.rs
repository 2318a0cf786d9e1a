// Finalization of a unique candidate
//
// Commits every syllable to the quantity its position demands and records
// which optional licences were used or passed over.

use std::mem;

use hexameter_core::enums::Length;

use super::{Foot, Pass, Position, ScannedLine};
use crate::syllable::{DigammaEffect, Outcome, Syllable};

fn open_long_nucleus(syllable: &Syllable) -> bool {
    syllable.coda.is_empty() && syllable.nucleus.length == Length::Long
}

fn commit_long(syllable: &mut Syllable) {
    if syllable.length == Length::Short {
        syllable.ictus_lengthened = true;
    }
    syllable.length = Length::Long;

    if syllable.correption_candidate && open_long_nucleus(syllable) {
        syllable.events.correption = Some(Outcome::Declined);
    }
    if syllable.hiatus_by_digamma && open_long_nucleus(syllable) {
        syllable.events.digamma = Some((DigammaEffect::Hiatus, Outcome::Happened));
    }
    if let Some(kind) = syllable.mute_liquid_next.filter(|_| syllable.mute_liquid_licensed()) {
        syllable.events.mute_liquid = Some((kind, Outcome::Declined));
    }
    if syllable.closed_by_digamma && syllable.nucleus.length != Length::Long {
        syllable.events.digamma = Some((DigammaEffect::Closed, Outcome::Happened));
    }
}

fn commit_short(syllables: &mut [Syllable], index: usize) {
    let mut moved = None;
    let syllable = &mut syllables[index];

    if syllable.length == Length::Long {
        if syllable.is_correptible() {
            if syllable.correption_candidate {
                syllable.events.correption = Some(Outcome::Happened);
            } else {
                syllable.events.digamma = Some((DigammaEffect::Hiatus, Outcome::Declined));
            }
        } else if let Some(kind) = syllable.mute_liquid_next.filter(|_| syllable.mute_liquid_licensed()) {
            syllable.events.mute_liquid = Some((kind, Outcome::Happened));
            moved = Some(mem::take(&mut syllable.coda));
        }
    }
    if syllable.closed_by_digamma && syllable.nucleus.length != Length::Long {
        syllable.events.digamma = Some((DigammaEffect::Closed, Outcome::Declined));
    }
    syllable.length = Length::Short;

    if let (Some(coda), Some(next)) = (moved, syllables.get_mut(index + 1)) {
        next.onset.insert_str(0, &coda);
    }
}

/// Commit a candidate foot sequence found at `pass`.
pub fn finalize(mut syllables: Vec<Syllable>, feet: Vec<Foot>, pass: Pass) -> ScannedLine {
    for foot in &feet {
        for (offset, position) in foot.kind.positions().iter().enumerate() {
            let index = foot.start + offset;
            match position {
                Position::Long => commit_long(&mut syllables[index]),
                Position::Short => commit_short(&mut syllables, index),
                Position::Anceps => {}
            }
        }
    }
    ScannedLine {
        syllables,
        feet,
        pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology::Vowel;
    use crate::scanner::FootKind;
    use crate::syllable::MuteLiquid;

    fn syllable(onset: &str, letters: &str, nucleus: Length, coda: &str, length: Length) -> Syllable {
        let mut s = Syllable::new(onset, Vowel::new(letters, "", nucleus), coda);
        s.length = length;
        s
    }

    fn dactyl_then_final(mut first_three: Vec<Syllable>) -> ScannedLine {
        first_three.push(syllable("t", "h", Length::Long, "", Length::Long));
        first_three.push(syllable("t", "o", Length::Short, "", Length::Short));
        // pad with four spondees so the foot list has the usual shape
        let mut syllables = first_three;
        for _ in 0..8 {
            syllables.insert(3, syllable("t", "h", Length::Long, "", Length::Long));
        }
        let mut feet = vec![Foot::new(FootKind::Dactyl, 0)];
        for k in 0..4 {
            feet.push(Foot::new(FootKind::Spondee, 3 + 2 * k));
        }
        feet.push(Foot::new(FootKind::Final, 11));
        finalize(syllables, feet, Pass::LAST)
    }

    #[test]
    fn unknowns_commit_by_position() {
        let line = dactyl_then_final(vec![
            syllable("t", "a", Length::Unknown, "", Length::Unknown),
            syllable("t", "a", Length::Unknown, "", Length::Unknown),
            syllable("t", "i", Length::Unknown, "", Length::Unknown),
        ]);
        let lengths: Vec<Length> = line.syllables()[..3].iter().map(|s| s.length).collect();
        assert_eq!(lengths, vec![Length::Long, Length::Short, Length::Short]);
        assert_eq!(line.syllables()[12].length, Length::Short);
    }

    #[test]
    fn correption_happened_in_short_position() {
        let mut kai = syllable("k", "ai", Length::Long, "", Length::Long);
        kai.correption_candidate = true;
        let line = dactyl_then_final(vec![
            syllable("t", "h", Length::Long, "", Length::Long),
            kai,
            syllable("", "o", Length::Short, "", Length::Short),
        ]);
        let kai = &line.syllables()[1];
        assert_eq!(kai.length, Length::Short);
        assert_eq!(kai.events.correption, Some(Outcome::Happened));
    }

    #[test]
    fn correption_declined_in_long_position() {
        let mut kai = syllable("k", "ai", Length::Long, "", Length::Long);
        kai.correption_candidate = true;
        let line = dactyl_then_final(vec![
            kai,
            syllable("", "o", Length::Short, "", Length::Short),
            syllable("t", "o", Length::Short, "", Length::Short),
        ]);
        assert_eq!(line.syllables()[0].events.correption, Some(Outcome::Declined));
    }

    #[test]
    fn mute_liquid_moves_coda_to_next_onset() {
        let mut pet = syllable("p", "e", Length::Short, "t", Length::Long);
        pet.mute_liquid_next = Some(MuteLiquid::Liquid);
        let line = dactyl_then_final(vec![
            syllable("t", "h", Length::Long, "", Length::Long),
            pet,
            syllable("r", "o", Length::Short, "", Length::Short),
        ]);
        let s = line.syllables();
        assert_eq!(s[1].coda, "");
        assert_eq!(s[2].onset, "tr");
        assert_eq!(s[1].events.mute_liquid, Some((MuteLiquid::Liquid, Outcome::Happened)));
    }

    #[test]
    fn ictus_lengthening_is_flagged() {
        let mut de = syllable("d", "e", Length::Short, "", Length::Short);
        de.last_in_word = true;
        let line = dactyl_then_final(vec![
            de,
            syllable("t", "o", Length::Short, "", Length::Short),
            syllable("t", "o", Length::Short, "", Length::Short),
        ]);
        assert!(line.syllables()[0].ictus_lengthened);
        assert_eq!(line.syllables()[0].length, Length::Long);
    }

    #[test]
    fn digamma_hiatus_outcomes() {
        let mut kh = syllable("k", "h", Length::Long, "", Length::Long);
        kh.hiatus_by_digamma = true;
        let line = dactyl_then_final(vec![
            kh.clone(),
            syllable("v", "e", Length::Short, "", Length::Short),
            syllable("p", "e", Length::Short, "", Length::Short),
        ]);
        assert_eq!(
            line.syllables()[0].events.digamma,
            Some((DigammaEffect::Hiatus, Outcome::Happened))
        );

        let line = dactyl_then_final(vec![
            syllable("d", "w", Length::Long, "", Length::Long),
            kh,
            syllable("v", "e", Length::Short, "", Length::Short),
        ]);
        let kh = &line.syllables()[1];
        assert_eq!(kh.length, Length::Short);
        assert_eq!(kh.events.digamma, Some((DigammaEffect::Hiatus, Outcome::Declined)));
        assert_eq!(kh.events.correption, None);
    }

    #[test]
    fn digamma_closure_outcomes() {
        let mut ton = syllable("t", "o", Length::Short, "", Length::Unknown);
        ton.closed_by_digamma = true;
        let line = dactyl_then_final(vec![
            ton.clone(),
            syllable("t", "o", Length::Short, "", Length::Short),
            syllable("t", "o", Length::Short, "", Length::Short),
        ]);
        assert_eq!(
            line.syllables()[0].events.digamma,
            Some((DigammaEffect::Closed, Outcome::Happened))
        );

        let line = dactyl_then_final(vec![
            syllable("t", "h", Length::Long, "", Length::Long),
            ton,
            syllable("t", "o", Length::Short, "", Length::Short),
        ]);
        assert_eq!(
            line.syllables()[1].events.digamma,
            Some((DigammaEffect::Closed, Outcome::Declined))
        );
    }
}
