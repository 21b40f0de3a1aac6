// Typed failures for the theory engine.
//
// Every error here is a local, recoverable condition surfaced to the
// caller. Nothing in the engine panics on bad input, and no operation
// produces partial output: a call either returns a complete result or
// one of these.

use crate::scale::ScaleType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Inversion index outside `[1, note_count - 1]`.
    #[error("invalid inversion {inversion}: this chord supports 1..={max}")]
    InvalidInversion { inversion: usize, max: usize },

    /// A tertian stack drawn from a scale matched no cataloged chord
    /// quality. Cannot happen for the built-in heptatonic scales.
    #[error("no cataloged chord quality matches the stack at degree {degree}")]
    UnresolvableChordQuality { degree: usize },

    /// Harmonization is defined only for seven-note scales.
    #[error("{scale:?} cannot be harmonized: only seven-note scales have diatonic degrees")]
    UnsupportedScaleForHarmonization { scale: ScaleType },

    /// A pitch name that is neither a sharp nor a flat spelling of any
    /// of the twelve pitch classes.
    #[error("unknown pitch name '{name}'")]
    UnknownPitchName { name: String },
}
