// Shared chord resolver: from chord specs to voiced progression entries.
//
// Both progression paths — the named-formula catalog and the roman-numeral
// notation parser — end up with the same shape: a labeled (root, quality)
// sequence. This module turns that sequence into concrete chords and picks
// a voicing for each.
//
// Voicing rule: for every chord, enumerate root position plus all
// inversions and take the one whose bass note is nearest (circular
// semitone distance) to the previous chord's bass, tie-broken by distance
// to the key tonic. The "previous bass" for the first chord is the tonic
// itself, so an opening chord may already sit in an inversion. This keeps
// bass motion smooth across the progression.

use crate::chord::{Chord, ChordType};
use crate::pitch::PitchClass;
use serde::{Deserialize, Serialize};

/// An unvoiced chord request: what to play, not yet how to voice it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSpec {
    /// Roman-numeral label, reproduced verbatim in the output.
    pub label: String,
    pub root: PitchClass,
    pub chord_type: ChordType,
}

/// One voiced chord in a progression. `root_note` is the chord root even
/// when the chosen voicing is an inversion; `label` is the roman-numeral
/// text exactly as it appeared in the formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionEntry {
    pub label: String,
    pub root_note: PitchClass,
    pub chord_type: ChordType,
    pub notes: Vec<PitchClass>,
}

/// Resolve a sequence of chord specs into voiced progression entries.
pub fn resolve_progression(key: PitchClass, specs: &[ChordSpec]) -> Vec<ProgressionEntry> {
    let mut entries = Vec::with_capacity(specs.len());
    let mut previous_bass = key;

    for spec in specs {
        let chord = Chord::build(spec.root, spec.chord_type);

        let notes = chord
            .voicings()
            .into_iter()
            .min_by_key(|voicing| {
                let bass = voicing[0];
                // Smoothness first, centering on the tonic as tie-break.
                (bass.distance(previous_bass), bass.distance(key))
            })
            .unwrap_or(chord.notes);

        previous_bass = notes[0];
        entries.push(ProgressionEntry {
            label: spec.label.clone(),
            root_note: spec.root,
            chord_type: spec.chord_type,
            notes,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(label: &str, root: PitchClass, chord_type: ChordType) -> ChordSpec {
        ChordSpec {
            label: label.to_string(),
            root,
            chord_type,
        }
    }

    #[test]
    fn test_labels_and_roots_pass_through() {
        let entries = resolve_progression(
            PitchClass::C,
            &[
                spec("I", PitchClass::C, ChordType::Major),
                spec("IV", PitchClass::F, ChordType::Major),
            ],
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "I");
        assert_eq!(entries[0].root_note, PitchClass::C);
        assert_eq!(entries[1].label, "IV");
        assert_eq!(entries[1].root_note, PitchClass::F);
    }

    #[test]
    fn test_first_chord_anchors_on_tonic() {
        // Tonic chord in the key of its own root starts in root position.
        let entries =
            resolve_progression(PitchClass::C, &[spec("I", PitchClass::C, ChordType::Major)]);
        assert_eq!(
            entries[0].notes,
            vec![PitchClass::C, PitchClass::E, PitchClass::G]
        );
    }

    #[test]
    fn test_bass_moves_to_nearest_inversion() {
        // After a D-rooted chord, G7 voices with D in the bass
        // (second inversion): D-F-G-B.
        let entries = resolve_progression(
            PitchClass::C,
            &[
                spec("ii", PitchClass::D, ChordType::Minor),
                spec("V7", PitchClass::G, ChordType::Dominant7),
            ],
        );
        assert_eq!(
            entries[1].notes,
            vec![PitchClass::D, PitchClass::F, PitchClass::G, PitchClass::B]
        );
        // The root is reported unchanged even though the voicing inverted.
        assert_eq!(entries[1].root_note, PitchClass::G);
    }

    #[test]
    fn test_deterministic() {
        let specs = [
            spec("I", PitchClass::FSharp, ChordType::Major),
            spec("V7", PitchClass::CSharp, ChordType::Dominant7),
            spec("IV", PitchClass::B, ChordType::Major),
        ];
        let first = resolve_progression(PitchClass::FSharp, &specs);
        let second = resolve_progression(PitchClass::FSharp, &specs);
        assert_eq!(first, second);
    }
}
