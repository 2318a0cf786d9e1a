// Candidate search
//
// Depth-first over (position, feet so far) with an explicit stack, yielding
// complete six-foot sequences lazily. Dactyl is explored before spondee.
// States whose remaining syllables cannot be covered by the remaining feet
// are never pushed.

use hexameter_core::enums::Length;

use super::{FEET, Foot, FootKind, Relaxations};
use crate::syllable::Syllable;

/// Lazy iterator over the foot sequences a syllable list admits.
pub struct Candidates<'a> {
    syllables: &'a [Syllable],
    relaxations: Relaxations,
    stack: Vec<(usize, Vec<Foot>)>,
}

impl<'a> Candidates<'a> {
    pub fn new(syllables: &'a [Syllable], relaxations: Relaxations) -> Self {
        let mut candidates = Self {
            syllables,
            relaxations,
            stack: Vec::new(),
        };
        if candidates.feasible(0, 0) {
            candidates.stack.push((0, Vec::with_capacity(FEET)));
        }
        candidates
    }

    /// Can the syllables from `position` on be covered by the feet still
    /// missing after `feet`?
    fn feasible(&self, position: usize, feet: usize) -> bool {
        let Some(remaining) = self.syllables.len().checked_sub(position) else {
            return false;
        };
        let free = FEET - 1 - feet;
        remaining >= 2 * free + 2 && remaining <= 3 * free + 2
    }

    fn long_capable(&self, syllable: &Syllable, foot_initial: bool) -> bool {
        syllable.length != Length::Short
            || (self.relaxations.ictus && foot_initial && syllable.ictus_eligible())
    }

    fn short_capable(&self, syllable: &Syllable) -> bool {
        match syllable.length {
            Length::Short | Length::Unknown => true,
            Length::Long => {
                syllable.is_correptible()
                    || (self.relaxations.mute_liquid && syllable.mute_liquid_licensed())
            }
        }
    }

    fn matches(&self, kind: FootKind, start: usize) -> bool {
        let s = &self.syllables[start..start + kind.span()];
        match kind {
            FootKind::Dactyl => {
                self.long_capable(&s[0], true) && self.short_capable(&s[1]) && self.short_capable(&s[2])
            }
            FootKind::Spondee => self.long_capable(&s[0], true) && self.long_capable(&s[1], false),
            FootKind::Final => self.long_capable(&s[0], true),
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = Vec<Foot>;

    fn next(&mut self) -> Option<Vec<Foot>> {
        while let Some((position, feet)) = self.stack.pop() {
            if feet.len() == FEET - 1 {
                // Feasibility leaves exactly two syllables here.
                if self.matches(FootKind::Final, position) {
                    let mut feet = feet;
                    feet.push(Foot::new(FootKind::Final, position));
                    return Some(feet);
                }
                continue;
            }
            // Pushed in reverse so the dactyl branch is popped first.
            for kind in [FootKind::Spondee, FootKind::Dactyl] {
                let next = position + kind.span();
                if self.feasible(next, feet.len() + 1) && self.matches(kind, position) {
                    let mut path = feet.clone();
                    path.push(Foot::new(kind, position));
                    self.stack.push((next, path));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology::Vowel;
    use crate::scanner::Pass;

    /// Syllables from a pattern: `L` long, `S` short, `U` unknown,
    /// `W` short and word-final.
    fn pattern(p: &str) -> Vec<Syllable> {
        p.chars()
            .map(|c| {
                let length = match c {
                    'L' => Length::Long,
                    'S' | 'W' => Length::Short,
                    _ => Length::Unknown,
                };
                let mut s = Syllable::new("t", Vowel::new("a", "", length), "");
                s.length = length;
                s.last_in_word = c == 'W';
                s
            })
            .collect()
    }

    fn kinds(feet: &[Foot]) -> String {
        feet.iter().map(|f| f.kind.symbol()).collect()
    }

    fn all(p: &str, pass: Pass) -> Vec<String> {
        let syllables = pattern(p);
        Candidates::new(&syllables, pass.relaxations())
            .map(|feet| kinds(&feet))
            .collect()
    }

    #[test]
    fn five_dactyls() {
        assert_eq!(all("LSSLSSLSSLSSLSSLS", Pass::FIRST), vec!["DDDDDF"]);
    }

    #[test]
    fn five_spondees() {
        assert_eq!(all("LLLLLLLLLLLL", Pass::FIRST), vec!["SSSSSF"]);
    }

    #[test]
    fn wrong_lengths_have_no_candidate() {
        assert!(all("LSSLSSLSSLSSLSSSS", Pass::FIRST).is_empty());
        assert!(all("LLLL", Pass::FIRST).is_empty());
        assert!(all("LSSLSSLSSLSSLSSLSSLL", Pass::FIRST).is_empty());
    }

    #[test]
    fn dactyl_branch_comes_first() {
        // 13 syllables: exactly one dactyl, placed anywhere among feet 1-5
        let found = all("UUUUUUUUUUULL", Pass::FIRST);
        assert_eq!(found.len(), 5);
        assert_eq!(found[0], "DSSSSF");
        assert_eq!(found[4], "SSSSDF");
    }

    #[test]
    fn ictus_only_when_enabled() {
        let p = "LSSLSSLSSLSSLSSWL";
        assert!(all(p, Pass::new(2).unwrap()).is_empty());
        assert_eq!(all(p, Pass::new(3).unwrap()), vec!["DDDDDF"]);
    }

    #[test]
    fn feet_partition_the_line() {
        let syllables = pattern("LSSLLLSSLLLSSLS");
        for feet in Candidates::new(&syllables, Pass::FIRST.relaxations()) {
            assert_eq!(feet.len(), FEET);
            assert_eq!(feet[0].start, 0);
            for pair in feet.windows(2) {
                assert_eq!(pair[0].end(), pair[1].start);
            }
            assert_eq!(feet[5].kind, FootKind::Final);
            assert_eq!(feet[5].end(), syllables.len());
        }
    }
}
