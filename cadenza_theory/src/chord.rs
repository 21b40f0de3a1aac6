// Chord catalog: named qualities, note construction, and inversions.
//
// A chord quality owns a fixed `'static` interval pattern (semitone
// offsets from the root, first offset 0, no duplicates). A `Chord` pairs
// a root with a quality and carries its notes root-first; inversions
// left-rotate that note sequence.
//
// `ChordType::from_stack` goes the other way: given the semitone
// intervals of a third/fifth/(seventh) stack it identifies the quality,
// which is how harmonization names the chords it builds.

use crate::error::TheoryError;
use crate::pitch::PitchClass;
use serde::{Deserialize, Serialize};

/// A named chord quality from the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Major7,
    Minor7,
    Dominant7,
    /// Also known as m7b5.
    HalfDiminished7,
    Diminished7,
    MinorMajor7,
    AugmentedMajor7,
}

impl ChordType {
    /// Every chord quality in the catalog.
    pub const ALL: [ChordType; 11] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::Dominant7,
        ChordType::HalfDiminished7,
        ChordType::Diminished7,
        ChordType::MinorMajor7,
        ChordType::AugmentedMajor7,
    ];

    /// Semitone offsets from the root for each chord tone.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::HalfDiminished7 => &[0, 3, 6, 10],
            // bb7 is enharmonically the major sixth
            ChordType::Diminished7 => &[0, 3, 6, 9],
            ChordType::MinorMajor7 => &[0, 3, 7, 11],
            ChordType::AugmentedMajor7 => &[0, 4, 8, 11],
        }
    }

    /// Human-facing label, title-cased and word-separated.
    pub fn label(self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
            ChordType::Major7 => "Major Seventh",
            ChordType::Minor7 => "Minor Seventh",
            ChordType::Dominant7 => "Dominant Seventh",
            ChordType::HalfDiminished7 => "Half Diminished Seventh",
            ChordType::Diminished7 => "Diminished Seventh",
            ChordType::MinorMajor7 => "Minor Major Seventh",
            ChordType::AugmentedMajor7 => "Augmented Major Seventh",
        }
    }

    /// Compact chord symbol suffix ("Cmaj7" style rendering).
    pub fn symbol(self) -> &'static str {
        match self {
            ChordType::Major => "",
            ChordType::Minor => "m",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "m7",
            ChordType::Dominant7 => "7",
            ChordType::HalfDiminished7 => "m7b5",
            ChordType::Diminished7 => "dim7",
            ChordType::MinorMajor7 => "m(maj7)",
            ChordType::AugmentedMajor7 => "aug(maj7)",
        }
    }

    /// Identify a quality from the semitone intervals of a tertian stack
    /// (third, fifth, optional seventh above the root). Returns `None`
    /// when no cataloged quality has exactly that interval set.
    pub fn from_stack(third: u8, fifth: u8, seventh: Option<u8>) -> Option<ChordType> {
        match (third, fifth, seventh) {
            (4, 7, None) => Some(ChordType::Major),
            (3, 7, None) => Some(ChordType::Minor),
            (3, 6, None) => Some(ChordType::Diminished),
            (4, 8, None) => Some(ChordType::Augmented),
            (4, 7, Some(11)) => Some(ChordType::Major7),
            (3, 7, Some(10)) => Some(ChordType::Minor7),
            (4, 7, Some(10)) => Some(ChordType::Dominant7),
            (3, 6, Some(10)) => Some(ChordType::HalfDiminished7),
            (3, 6, Some(9)) => Some(ChordType::Diminished7),
            (3, 7, Some(11)) => Some(ChordType::MinorMajor7),
            (4, 8, Some(11)) => Some(ChordType::AugmentedMajor7),
            _ => None,
        }
    }
}

/// A concrete chord: a root, a quality, and the notes root-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: PitchClass,
    pub chord_type: ChordType,
    pub notes: Vec<PitchClass>,
}

impl Chord {
    /// Build a chord in root position.
    pub fn build(root: PitchClass, chord_type: ChordType) -> Chord {
        Chord {
            root,
            chord_type,
            notes: chord_notes(root, chord_type),
        }
    }

    /// The notes after the k-th inversion (left-rotation by k). Root
    /// position is not an inversion; valid k is `1..=notes.len() - 1`.
    pub fn invert(&self, inversion: usize) -> Result<Vec<PitchClass>, TheoryError> {
        let max = self.notes.len().saturating_sub(1);
        if inversion < 1 || inversion > max {
            return Err(TheoryError::InvalidInversion { inversion, max });
        }
        let mut notes = self.notes.clone();
        notes.rotate_left(inversion);
        Ok(notes)
    }

    /// Root position followed by every distinct inversion, in order.
    pub fn voicings(&self) -> Vec<Vec<PitchClass>> {
        let mut voicings = Vec::with_capacity(self.notes.len());
        let mut current = self.notes.clone();
        for _ in 0..self.notes.len() {
            voicings.push(current.clone());
            current.rotate_left(1);
        }
        voicings
    }
}

/// The notes of a chord built on a root, root-first.
pub fn chord_notes(root: PitchClass, chord_type: ChordType) -> Vec<PitchClass> {
    chord_type
        .intervals()
        .iter()
        .map(|&offset| root.transpose(offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_are_duplicate_free() {
        for chord_type in ChordType::ALL {
            let pattern = chord_type.intervals();
            assert_eq!(pattern[0], 0, "{:?}", chord_type);
            for (i, &a) in pattern.iter().enumerate() {
                assert!(a < 12);
                assert!(!pattern[i + 1..].contains(&a), "{:?}", chord_type);
            }
        }
    }

    #[test]
    fn test_from_stack_inverts_intervals() {
        // Every cataloged quality must round-trip through its own stack.
        for chord_type in ChordType::ALL {
            let pattern = chord_type.intervals();
            let seventh = pattern.get(3).copied();
            assert_eq!(
                ChordType::from_stack(pattern[1], pattern[2], seventh),
                Some(chord_type)
            );
        }
        assert_eq!(ChordType::from_stack(5, 7, None), None);
    }

    #[test]
    fn test_triads() {
        assert_eq!(
            chord_notes(PitchClass::A, ChordType::Minor),
            vec![PitchClass::A, PitchClass::C, PitchClass::E]
        );
        assert_eq!(
            chord_notes(PitchClass::B, ChordType::Diminished),
            vec![PitchClass::B, PitchClass::D, PitchClass::F]
        );
    }

    #[test]
    fn test_sevenths() {
        assert_eq!(
            chord_notes(PitchClass::C, ChordType::Major7),
            vec![PitchClass::C, PitchClass::E, PitchClass::G, PitchClass::B]
        );
        assert_eq!(
            chord_notes(PitchClass::G, ChordType::Dominant7),
            vec![PitchClass::G, PitchClass::B, PitchClass::D, PitchClass::F]
        );
    }

    #[test]
    fn test_invert_rotates_left() {
        let chord = Chord::build(PitchClass::C, ChordType::Major);
        assert_eq!(
            chord.invert(1).unwrap(),
            vec![PitchClass::E, PitchClass::G, PitchClass::C]
        );
        assert_eq!(
            chord.invert(2).unwrap(),
            vec![PitchClass::G, PitchClass::C, PitchClass::E]
        );
    }

    #[test]
    fn test_invert_rejects_out_of_range() {
        let chord = Chord::build(PitchClass::C, ChordType::Major);
        assert_eq!(
            chord.invert(0),
            Err(TheoryError::InvalidInversion {
                inversion: 0,
                max: 2
            })
        );
        assert_eq!(
            chord.invert(3),
            Err(TheoryError::InvalidInversion {
                inversion: 3,
                max: 2
            })
        );
    }

    #[test]
    fn test_full_rotation_is_identity() {
        let chord = Chord::build(PitchClass::G, ChordType::Dominant7);
        let mut notes = chord.notes.clone();
        let len = notes.len();
        notes.rotate_left(len);
        assert_eq!(notes, chord.notes);
    }

    #[test]
    fn test_voicings_enumeration() {
        let chord = Chord::build(PitchClass::G, ChordType::Dominant7);
        let voicings = chord.voicings();
        assert_eq!(voicings.len(), 4);
        assert_eq!(voicings[0], chord.notes);
        assert_eq!(
            voicings[3],
            vec![PitchClass::F, PitchClass::G, PitchClass::B, PitchClass::D]
        );
    }
}
