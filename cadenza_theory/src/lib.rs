// Cadenza Theory Engine
//
// A pure music-theory engine: pitch-class arithmetic, scale and chord
// catalogs, chord inversions, diatonic harmonization, and named chord
// progressions with simple voice leading. Everything here is deterministic
// and allocation-light; the catalogs are `'static` tables built into the
// binary, so every operation is safe to call concurrently without locking.
//
// Architecture:
// - pitch.rs: the twelve pitch classes, mod-12 arithmetic, spelling
// - scale.rs: scale types and their interval patterns
// - chord.rs: chord qualities, note construction, inversions
// - harmonize.rs: diatonic harmonization by tertian stacking
// - resolve.rs: shared chord resolver with voice-leading voicing
// - progression.rs: named progression formulas (blues block, circle, ...)
// - error.rs: the typed failure set
//
// The roman-numeral notation parser lives in `cadenza_notation`, which
// layers on top of this crate.

pub mod chord;
pub mod error;
pub mod harmonize;
pub mod pitch;
pub mod progression;
pub mod resolve;
pub mod scale;

pub use chord::{Chord, ChordType, chord_notes};
pub use error::TheoryError;
pub use harmonize::{DiatonicDegree, harmonize};
pub use pitch::{PitchClass, Spelling};
pub use progression::{HarmonicFormula, degree_root, progression};
pub use resolve::{ChordSpec, ProgressionEntry, resolve_progression};
pub use scale::{ScaleType, scale_notes};
