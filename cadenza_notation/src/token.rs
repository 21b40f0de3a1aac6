// Lexer for roman-numeral chord tokens.
//
// A token is `accidental? numeral suffix?` with no internal whitespace:
// an optional `b`/`#` prefix, a roman numeral I..VII, and an optional
// quality marker. Lexing is a three-stage scan over those fields, so a
// failure can always be pinned to the part of the token that broke.
//
// Case carries meaning: an uppercase numeral defaults to a major triad,
// lowercase to minor. Mixed-case numerals ("Vi") are rejected rather than
// guessed at.

use crate::error::NotationError;

/// Accidental prefix on a degree: chromatic root alteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    Flat,
    Sharp,
}

impl Accidental {
    /// Semitone shift applied to the degree root.
    pub fn shift(self) -> i8 {
        match self {
            Accidental::Flat => -1,
            Accidental::Sharp => 1,
        }
    }
}

/// Quality marker following the numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualitySuffix {
    /// `7` — plain seventh; dominant on uppercase, minor on lowercase.
    Seventh,
    /// `maj7` / `M7`.
    MajorSeventh,
    /// `dim` / `o` / `°`.
    Diminished,
    /// `dim7` / `o7` / `°7`.
    DiminishedSeventh,
    /// `ø` / `ø7` / `m7b5`.
    HalfDiminishedSeventh,
    /// `aug` / `+`.
    Augmented,
    /// `augmaj7` / `+maj7`.
    AugmentedMajorSeventh,
}

/// A fully lexed roman-numeral token. `text` is the token exactly as the
/// user wrote it and becomes the entry label downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanToken {
    pub text: String,
    pub accidental: Option<Accidental>,
    /// Scale degree 1..=7.
    pub degree: u8,
    /// True when the numeral was written uppercase (major family).
    pub uppercase: bool,
    pub suffix: Option<QualitySuffix>,
}

/// Lex one whitespace-free token into its parts.
pub fn lex_token(text: &str) -> Result<RomanToken, NotationError> {
    let (accidental, rest) = scan_accidental(text);
    let (numeral, suffix_text) = scan_numeral(rest);

    let (degree, uppercase) = classify_numeral(numeral).ok_or(NotationError::UnrecognizedNumeral {
        token: text.to_string(),
    })?;

    let suffix = match suffix_text {
        "" => None,
        s => Some(
            classify_suffix(s).ok_or(NotationError::UnrecognizedQualitySuffix {
                token: text.to_string(),
                suffix: s.to_string(),
            })?,
        ),
    };

    Ok(RomanToken {
        text: text.to_string(),
        accidental,
        degree,
        uppercase,
        suffix,
    })
}

/// Strip an optional accidental prefix. A lone `b` or `#` is left alone
/// so it fails later as a missing numeral, not a bare accidental.
fn scan_accidental(text: &str) -> (Option<Accidental>, &str) {
    if text.len() < 2 {
        return (None, text);
    }
    match text.as_bytes()[0] {
        b'b' => (Some(Accidental::Flat), &text[1..]),
        b'#' => (Some(Accidental::Sharp), &text[1..]),
        _ => (None, text),
    }
}

/// Split off the numeral portion: the longest prefix of roman-numeral
/// letters. `x` is included so that out-of-range numerals like `IX` are
/// reported as bad numerals rather than bad suffixes.
fn scan_numeral(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !matches!(c, 'i' | 'v' | 'x' | 'I' | 'V' | 'X'))
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Map a numeral to (degree, uppercase). Recognition is case-insensitive
/// but the case must be uniform; anything outside I..VII is rejected.
fn classify_numeral(numeral: &str) -> Option<(u8, bool)> {
    if numeral.is_empty() {
        return None;
    }
    let uppercase = if numeral.chars().all(|c| c.is_uppercase()) {
        true
    } else if numeral.chars().all(|c| c.is_lowercase()) {
        false
    } else {
        return None;
    };
    let degree = match numeral.to_lowercase().as_str() {
        "i" => 1,
        "ii" => 2,
        "iii" => 3,
        "iv" => 4,
        "v" => 5,
        "vi" => 6,
        "vii" => 7,
        _ => return None,
    };
    Some((degree, uppercase))
}

fn classify_suffix(suffix: &str) -> Option<QualitySuffix> {
    match suffix {
        "7" => Some(QualitySuffix::Seventh),
        "maj7" | "M7" => Some(QualitySuffix::MajorSeventh),
        "dim" | "o" | "°" => Some(QualitySuffix::Diminished),
        "dim7" | "o7" | "°7" => Some(QualitySuffix::DiminishedSeventh),
        "ø" | "ø7" | "m7b5" => Some(QualitySuffix::HalfDiminishedSeventh),
        "aug" | "+" => Some(QualitySuffix::Augmented),
        "augmaj7" | "+maj7" => Some(QualitySuffix::AugmentedMajorSeventh),
        _ => None,
    }
}
