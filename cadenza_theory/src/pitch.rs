// The twelve equal-tempered pitch classes and their arithmetic.
//
// A pitch class is an octave-independent tone identified by its residue
// mod 12 (C = 0 .. B = 11). All arithmetic stays inside [0, 11]; there is
// no representation for a negative or out-of-range pitch class, so
// transposition can never escape the wheel.
//
// Display names come in two spellings: sharp ("C#") and flat ("Db").
// The engine itself only cares about residues; spelling is a rendering
// preference threaded through by callers.

use crate::error::TheoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Preferred accidental spelling when rendering pitch names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    Sharps,
    Flats,
}

/// One of the twelve pitch classes, octave-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

impl PitchClass {
    /// All twelve pitch classes in semitone order, C first.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// The residue mod 12 of this pitch class (C = 0 .. B = 11).
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// The pitch class for a semitone value, reduced mod 12.
    pub fn from_semitone(semitone: u8) -> PitchClass {
        Self::ALL[(semitone % 12) as usize]
    }

    /// Transpose upward by a number of semitones, wrapping at the octave.
    /// The interval is reduced mod 12 first, so the sum cannot overflow.
    pub fn transpose(self, semitones: u8) -> PitchClass {
        PitchClass::from_semitone((self.semitone() + (semitones % 12)) % 12)
    }

    /// Shift by a signed semitone delta (accidentals: -1 = flat, +1 = sharp).
    pub fn offset(self, delta: i8) -> PitchClass {
        let shifted = (i16::from(self.semitone()) + i16::from(delta)).rem_euclid(12);
        PitchClass::from_semitone(shifted as u8)
    }

    /// Sharp spelling of this pitch class ("C#", "F#", ...).
    pub fn sharp_name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Flat spelling of this pitch class ("Db", "Gb", ...).
    pub fn flat_name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "Db",
            PitchClass::D => "D",
            PitchClass::DSharp => "Eb",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "Gb",
            PitchClass::G => "G",
            PitchClass::GSharp => "Ab",
            PitchClass::A => "A",
            PitchClass::ASharp => "Bb",
            PitchClass::B => "B",
        }
    }

    /// Name under a spelling preference.
    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharps => self.sharp_name(),
            Spelling::Flats => self.flat_name(),
        }
    }

    /// Parse a pitch name, accepting both spellings case-insensitively
    /// ("C", "c#", "Db", "bb" are all valid).
    pub fn parse(name: &str) -> Result<PitchClass, TheoryError> {
        match name.to_lowercase().as_str() {
            "c" => Ok(PitchClass::C),
            "c#" | "db" => Ok(PitchClass::CSharp),
            "d" => Ok(PitchClass::D),
            "d#" | "eb" => Ok(PitchClass::DSharp),
            "e" => Ok(PitchClass::E),
            "f" => Ok(PitchClass::F),
            "f#" | "gb" => Ok(PitchClass::FSharp),
            "g" => Ok(PitchClass::G),
            "g#" | "ab" => Ok(PitchClass::GSharp),
            "a" => Ok(PitchClass::A),
            "a#" | "bb" => Ok(PitchClass::ASharp),
            "b" => Ok(PitchClass::B),
            _ => Err(TheoryError::UnknownPitchName {
                name: name.to_string(),
            }),
        }
    }

    /// Circular semitone distance between two pitch classes (0..=6).
    pub fn distance(self, other: PitchClass) -> u8 {
        let a = self.semitone();
        let b = other.semitone();
        let diff = a.abs_diff(b);
        diff.min(12 - diff)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sharp_name())
    }
}
