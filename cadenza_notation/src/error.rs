// Typed failures for formula parsing.
//
// Parsing is whole-formula: any token failure fails the entire call, so a
// caller shows one precise error instead of a partial progression.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The formula contained no tokens after trimming.
    #[error("empty progression formula")]
    EmptyFormula,

    /// The numeral portion of a token is not a roman numeral I..VII.
    #[error("'{token}' does not contain a roman numeral I..VII")]
    UnrecognizedNumeral { token: String },

    /// The token carried a quality suffix the catalog does not know.
    /// Unknown suffixes are never silently replaced by a default.
    #[error("'{token}' has an unrecognized quality suffix '{suffix}'")]
    UnrecognizedQualitySuffix { token: String, suffix: String },
}
