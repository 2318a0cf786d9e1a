// Ending rules: vowel lengths of inflectional endings
//
// Once a stem has been aligned against a token, the vowels left over belong
// to the ending. Their lengths follow from the ending class of the lemma and
// the parse. Each class has one rule object; rules are looked up through a
// small static registry keyed by `EndingClass`.

use hexameter_core::Parse;
use hexameter_core::enums::{Case, EndingClass, Length, Number};

/// Completes the length of an ambiguous vowel (α ι υ) inside an ending.
///
/// `before` and `after` are the token letters on either side of the vowel,
/// stem included.
pub trait EndingRule: Sync {
    fn class(&self) -> EndingClass;

    fn vowel_length(&self, vowel: char, before: &str, after: &str, parse: &Parse) -> Length;
}

/// Endings shared by every class: dative plural -σι(ν), athematic -μι.
fn common_length(vowel: char, before: &str, after: &str) -> Length {
    let word_final = after.is_empty() || after == "n";
    match vowel {
        'i' if word_final && (before.ends_with('s') || before.ends_with('m')) => Length::Short,
        _ => Length::Unknown,
    }
}

struct FirstDeclension;

impl EndingRule for FirstDeclension {
    fn class(&self) -> EndingClass {
        EndingClass::FirstDeclension
    }

    fn vowel_length(&self, vowel: char, before: &str, after: &str, parse: &Parse) -> Length {
        match (vowel, after) {
            // -ᾱς genitive singular and accusative plural
            ('a', "s") => Length::Long,
            ('a', "") if parse.number == Some(Number::Dual) => Length::Long,
            ('a', "") | ('a', "n") if parse.case == Some(Case::Genitive) => Length::Long,
            _ => common_length(vowel, before, after),
        }
    }
}

struct SecondDeclension;

impl EndingRule for SecondDeclension {
    fn class(&self) -> EndingClass {
        EndingClass::SecondDeclension
    }

    fn vowel_length(&self, vowel: char, before: &str, after: &str, _parse: &Parse) -> Length {
        match (vowel, after) {
            // neuter plural -ᾰ
            ('a', "") => Length::Short,
            _ => common_length(vowel, before, after),
        }
    }
}

struct ThirdDeclension;

impl EndingRule for ThirdDeclension {
    fn class(&self) -> EndingClass {
        EndingClass::ThirdDeclension
    }

    fn vowel_length(&self, vowel: char, before: &str, after: &str, parse: &Parse) -> Length {
        let nominative = matches!(parse.case, Some(Case::Nominative | Case::Vocative))
            && matches!(parse.number, None | Some(Number::Singular));
        match (vowel, after) {
            // accusative singular / neuter plural -ᾰ, accusative plural -ᾰς
            ('a', "") | ('a', "s") if !nominative => Length::Short,
            // dative singular -ῐ
            ('i', "") if parse.case == Some(Case::Dative) => Length::Short,
            _ => common_length(vowel, before, after),
        }
    }
}

/// Shared by thematic and athematic verbs: sigmatic aorist endings.
fn aorist_length(vowel: char, before: &str, after: &str, parse: &Parse) -> Length {
    if vowel != 'a' {
        return Length::Unknown;
    }
    if parse.is_participle() {
        // -σᾱς, -σᾱσα: the vowel before the participial sigma is long
        return match after {
            "s" | "sa" | "sai" | "sh" | "shs" => Length::Long,
            _ => Length::Unknown,
        };
    }
    match after {
        "" | "s" | "n" | "te" | "men" | "sqai" | "to" | "nto" | "meqa" | "i" => Length::Short,
        _ => Length::Unknown,
    }
}

struct ThematicVerb;

impl EndingRule for ThematicVerb {
    fn class(&self) -> EndingClass {
        EndingClass::ThematicVerb
    }

    fn vowel_length(&self, vowel: char, before: &str, after: &str, parse: &Parse) -> Length {
        match aorist_length(vowel, before, after, parse) {
            Length::Unknown => common_length(vowel, before, after),
            known => known,
        }
    }
}

struct AthematicVerb;

impl EndingRule for AthematicVerb {
    fn class(&self) -> EndingClass {
        EndingClass::AthematicVerb
    }

    fn vowel_length(&self, vowel: char, before: &str, after: &str, parse: &Parse) -> Length {
        let nu_present = vowel == 'u' && before.ends_with('n');
        match after {
            // -νῡμι / -νῠμεν: long in the singular, short in the plural
            "mi" | "s" | "si" | "sin" if nu_present => Length::Long,
            _ if nu_present => Length::Short,
            _ => match aorist_length(vowel, before, after, parse) {
                Length::Unknown => common_length(vowel, before, after),
                known => known,
            },
        }
    }
}

struct Indeclinable;

impl EndingRule for Indeclinable {
    fn class(&self) -> EndingClass {
        EndingClass::Indeclinable
    }

    fn vowel_length(&self, vowel: char, before: &str, after: &str, _parse: &Parse) -> Length {
        common_length(vowel, before, after)
    }
}

static REGISTRY: &[&dyn EndingRule] = &[
    &FirstDeclension,
    &SecondDeclension,
    &ThirdDeclension,
    &ThematicVerb,
    &AthematicVerb,
    &Indeclinable,
];

/// The rule for an ending class.
pub fn rule_for(class: EndingClass) -> &'static dyn EndingRule {
    REGISTRY
        .iter()
        .copied()
        .find(|rule| rule.class() == class)
        .unwrap_or(&Indeclinable)
}
