// Diatonic harmonization: one chord per scale degree.
//
// Chords are built by stacking thirds *in scale steps*: the chord on
// degree i takes the scale notes at i, i+2, i+4 (and i+6 for sevenths),
// wrapping around the scale. The chord tones are therefore always members
// of the parent scale, and the quality at a given degree depends on the
// scale, not just on the degree number — harmonizing the same root over
// two different scales yields different qualities.
//
// Only seven-note scales have well-defined diatonic degrees here; the
// pentatonics are rejected at the engine level rather than leaving the
// restriction to callers.

use crate::chord::ChordType;
use crate::error::TheoryError;
use crate::pitch::PitchClass;
use crate::scale::{ScaleType, scale_notes};
use serde::{Deserialize, Serialize};

/// One harmonized scale degree: a numeric degree (1..=7), its chord, and
/// the chord tones drawn from the scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiatonicDegree {
    pub degree: usize,
    pub root_note: PitchClass,
    pub chord_type: ChordType,
    pub notes: Vec<PitchClass>,
}

/// Harmonize a scale: build the diatonic triad (or seventh chord) on
/// every degree.
pub fn harmonize(
    root: PitchClass,
    scale: ScaleType,
    use_sevenths: bool,
) -> Result<Vec<DiatonicDegree>, TheoryError> {
    if !scale.is_heptatonic() {
        return Err(TheoryError::UnsupportedScaleForHarmonization { scale });
    }

    let scale_tones = scale_notes(root, scale);
    let mut degrees = Vec::with_capacity(7);

    for i in 0..7 {
        let degree_root = scale_tones[i];
        let third = scale_tones[(i + 2) % 7];
        let fifth = scale_tones[(i + 4) % 7];

        let root_val = degree_root.semitone();
        let third_interval = (third.semitone() + 12 - root_val) % 12;
        let fifth_interval = (fifth.semitone() + 12 - root_val) % 12;

        let mut notes = vec![degree_root, third, fifth];
        let mut seventh_interval = None;
        if use_sevenths {
            let seventh = scale_tones[(i + 6) % 7];
            seventh_interval = Some((seventh.semitone() + 12 - root_val) % 12);
            notes.push(seventh);
        }

        let chord_type = ChordType::from_stack(third_interval, fifth_interval, seventh_interval)
            .ok_or(TheoryError::UnresolvableChordQuality { degree: i + 1 })?;

        degrees.push(DiatonicDegree {
            degree: i + 1,
            root_note: degree_root,
            chord_type,
            notes,
        });
    }

    Ok(degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qualities(degrees: &[DiatonicDegree]) -> Vec<ChordType> {
        degrees.iter().map(|d| d.chord_type).collect()
    }

    #[test]
    fn test_c_major_triads() {
        let harmony = harmonize(PitchClass::C, ScaleType::Major, false).unwrap();
        assert_eq!(harmony.len(), 7);
        assert_eq!(
            qualities(&harmony),
            vec![
                ChordType::Major,
                ChordType::Minor,
                ChordType::Minor,
                ChordType::Major,
                ChordType::Major,
                ChordType::Minor,
                ChordType::Diminished,
            ]
        );
        // Degrees are numbered from 1 and rooted on the scale notes
        assert_eq!(harmony[0].degree, 1);
        assert_eq!(harmony[4].root_note, PitchClass::G);
    }

    #[test]
    fn test_c_major_sevenths() {
        let harmony = harmonize(PitchClass::C, ScaleType::Major, true).unwrap();
        assert_eq!(
            qualities(&harmony),
            vec![
                ChordType::Major7,
                ChordType::Minor7,
                ChordType::Minor7,
                ChordType::Major7,
                ChordType::Dominant7,
                ChordType::Minor7,
                ChordType::HalfDiminished7,
            ]
        );
        for degree in &harmony {
            assert_eq!(degree.notes.len(), 4);
        }
    }

    #[test]
    fn test_c_harmonic_minor_triads() {
        let harmony = harmonize(PitchClass::C, ScaleType::HarmonicMinor, false).unwrap();
        assert_eq!(
            qualities(&harmony),
            vec![
                ChordType::Minor,
                ChordType::Diminished,
                ChordType::Augmented,
                ChordType::Minor,
                ChordType::Major,
                ChordType::Major,
                ChordType::Diminished,
            ]
        );
    }

    #[test]
    fn test_melodic_minor_sevenths() {
        let harmony = harmonize(PitchClass::C, ScaleType::MelodicMinor, true).unwrap();
        assert_eq!(
            qualities(&harmony),
            vec![
                ChordType::MinorMajor7,
                ChordType::Minor7,
                ChordType::AugmentedMajor7,
                ChordType::Dominant7,
                ChordType::Dominant7,
                ChordType::HalfDiminished7,
                ChordType::HalfDiminished7,
            ]
        );
    }

    #[test]
    fn test_same_root_different_scale_differs() {
        // Degree 1 of C major is major; degree 1 of C dorian is minor.
        let major = harmonize(PitchClass::C, ScaleType::Major, false).unwrap();
        let dorian = harmonize(PitchClass::C, ScaleType::Dorian, false).unwrap();
        assert_eq!(major[0].chord_type, ChordType::Major);
        assert_eq!(dorian[0].chord_type, ChordType::Minor);
    }

    #[test]
    fn test_pentatonic_is_rejected() {
        for scale in [ScaleType::PentatonicMajor, ScaleType::PentatonicMinor] {
            assert_eq!(
                harmonize(PitchClass::C, scale, false),
                Err(TheoryError::UnsupportedScaleForHarmonization { scale })
            );
        }
    }

    #[test]
    fn test_all_heptatonic_scales_resolve() {
        // Defensive path: every built-in seven-note scale must harmonize
        // to cataloged qualities, with and without sevenths.
        for scale in ScaleType::ALL {
            if !scale.is_heptatonic() {
                continue;
            }
            for root in PitchClass::ALL {
                assert!(harmonize(root, scale, false).is_ok(), "{:?}", scale);
                assert!(harmonize(root, scale, true).is_ok(), "{:?}", scale);
            }
        }
    }
}
