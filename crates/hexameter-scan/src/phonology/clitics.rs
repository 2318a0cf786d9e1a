// Clitic classification
//
// Enclitics lean on the preceding word and proclitics on the following one.
// The boundary between a clitic and its host still separates two words for
// correption and digamma purposes, but it is not a word break for caesura or
// diaeresis.

use hexameter_core::Token;
use hexameter_core::character::{has_accent, letters};

/// Particles that are always enclitic, matched on the lemma (letters only).
const ENCLITIC_LEMMAS: &[&str] = &["te", "ge", "per", "toi", "ke", "ken", "nu", "qhn", "ra"];

/// Enclitic forms of personal pronouns. Accented, they are orthotone.
const ENCLITIC_FORMS: &[&str] = &[
    "moi", "mou", "me", "soi", "sou", "se", "oi", "min", "nin", "te", "ge", "per", "toi", "ke",
    "ken", "nu", "qhn", "r", "ra",
];

/// Unaccented forms that attach to the following word: articles,
/// prepositions, conjunctions and negations.
const PROCLITIC_FORMS: &[&str] = &[
    "o", "h", "oi", "ai", "en", "eis", "es", "ek", "ec", "ws", "ei", "ou", "ouk", "oux",
];

/// Lemma of the article; its unaccented forms (ὁ ἡ οἱ αἱ) are proclitic.
const ARTICLE_LEMMA: &str = "o";

/// Prosodic role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CliticKind {
    Enclitic,
    Proclitic,
    Ordinary,
}

/// Classify a token from its form and parses.
pub fn classify(token: &Token<'_>) -> CliticKind {
    let form = letters(token.text);
    let accented = has_accent(token.text);

    // οἱ is both the article and the enclitic pronoun; a parse decides.
    let article = token
        .parses
        .iter()
        .any(|p| letters(&p.lemma) == ARTICLE_LEMMA);
    if article && !accented {
        return CliticKind::Proclitic;
    }

    let lemma_enclitic = token
        .parses
        .iter()
        .any(|p| ENCLITIC_LEMMAS.contains(&letters(&p.lemma).as_str()));
    if lemma_enclitic || (!accented && ENCLITIC_FORMS.contains(&form.as_str())) {
        return CliticKind::Enclitic;
    }
    if !accented && PROCLITIC_FORMS.contains(&form.as_str()) {
        return CliticKind::Proclitic;
    }
    CliticKind::Ordinary
}
