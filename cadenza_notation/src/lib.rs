// Cadenza Notation — roman-numeral progression formulas as text.
//
// Turns a loosely structured formula string ("I vi ii V7", "bVI", even
// "i-iv-V7") into concrete, voiced chords in a key. Each token is lexed
// into (accidental, numeral, suffix) by token.rs, resolved against the
// fixed major reference frame of the key, and handed to the theory
// crate's shared resolver for voicing.
//
// Resolution per token:
// 1. numeral -> scale degree 1..=7
// 2. degree root from the key's major scale (independent of any
//    harmonization machinery)
// 3. accidental shifts the root a semitone (borrowed/chromatic chords)
// 4. quality = case-derived base layered with the suffix marker
// 5. the entry label is the token text verbatim
//
// Failures are all-or-nothing; see error.rs.

pub mod error;
pub mod token;

pub use error::NotationError;
pub use token::{Accidental, QualitySuffix, RomanToken, lex_token};

use cadenza_theory::chord::ChordType;
use cadenza_theory::pitch::PitchClass;
use cadenza_theory::progression::degree_root;
use cadenza_theory::resolve::{ChordSpec, ProgressionEntry, resolve_progression};

/// Parse a whole formula string into a voiced progression in a key.
///
/// Tokens are separated by whitespace or dashes. If any token fails, the
/// whole call fails and nothing is returned.
pub fn parse_progression(
    root: PitchClass,
    formula_text: &str,
) -> Result<Vec<ProgressionEntry>, NotationError> {
    let tokens: Vec<&str> = formula_text
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(NotationError::EmptyFormula);
    }

    // Lex everything before resolving anything, so a late bad token
    // cannot leave a half-built progression behind.
    let specs = tokens
        .iter()
        .map(|part| {
            let token = lex_token(part)?;
            Ok(resolve_token(root, &token))
        })
        .collect::<Result<Vec<ChordSpec>, NotationError>>()?;

    Ok(resolve_progression(root, &specs))
}

/// Resolve one lexed token to a chord spec in the key's major frame.
fn resolve_token(key: PitchClass, token: &RomanToken) -> ChordSpec {
    let natural = degree_root(key, token.degree);
    let chord_root = match token.accidental {
        Some(accidental) => natural.offset(accidental.shift()),
        None => natural,
    };

    ChordSpec {
        label: token.text.clone(),
        root: chord_root,
        chord_type: chord_quality(token.uppercase, token.suffix),
    }
}

/// Final chord quality from the numeral case and the optional suffix.
/// The case picks the major/minor family; an explicit quality marker
/// (diminished, augmented, half-diminished) overrides the family.
fn chord_quality(uppercase: bool, suffix: Option<QualitySuffix>) -> ChordType {
    match (suffix, uppercase) {
        (None, true) => ChordType::Major,
        (None, false) => ChordType::Minor,
        (Some(QualitySuffix::Seventh), true) => ChordType::Dominant7,
        (Some(QualitySuffix::Seventh), false) => ChordType::Minor7,
        (Some(QualitySuffix::MajorSeventh), true) => ChordType::Major7,
        (Some(QualitySuffix::MajorSeventh), false) => ChordType::MinorMajor7,
        (Some(QualitySuffix::Diminished), _) => ChordType::Diminished,
        (Some(QualitySuffix::DiminishedSeventh), _) => ChordType::Diminished7,
        (Some(QualitySuffix::HalfDiminishedSeventh), _) => ChordType::HalfDiminished7,
        (Some(QualitySuffix::Augmented), _) => ChordType::Augmented,
        (Some(QualitySuffix::AugmentedMajorSeventh), _) => ChordType::AugmentedMajor7,
    }
}
