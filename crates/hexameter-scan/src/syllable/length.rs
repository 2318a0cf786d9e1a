// Syllable length assignment
//
// Quantity by position and by nature. Correption, mute + liquid and ictus
// are left to the scanner; this only fixes what no licence can change, plus
// the two digamma/ζ cases where a short vowel may or may not make position.

use hexameter_core::enums::Length;

use super::{DoubleConsonant, Syllable};

/// Length of one syllable from its structure.
pub fn syllable_length(syllable: &Syllable) -> Length {
    let nucleus = syllable.nucleus.length;
    if !syllable.coda.is_empty() {
        return Length::Long;
    }
    match syllable.double_consonant_next {
        Some(DoubleConsonant::Closing) => return Length::Long,
        Some(DoubleConsonant::PossiblyShort) => return position_or_unknown(nucleus),
        None => {}
    }
    if syllable.closed_by_digamma {
        return position_or_unknown(nucleus);
    }
    nucleus
}

fn position_or_unknown(nucleus: Length) -> Length {
    if nucleus == Length::Long {
        Length::Long
    } else {
        Length::Unknown
    }
}

/// Assign a length to every syllable.
pub fn assign_lengths(syllables: &mut [Syllable]) {
    for syllable in syllables {
        syllable.length = syllable_length(syllable);
    }
}
