// Named progression formulas.
//
// A formula is an ordered table of (label, degree, quality override)
// steps. Degree roots always come from the major reference scale of the
// key — progressions are anchored to the major frame even when a step
// borrows a quality (a V7 in a blues block, say). When a step carries no
// override, the default diatonic major-scale quality for that degree
// applies. Labels are the literal roman-numeral text; their case encodes
// the quality family by notation convention.

use crate::chord::ChordType;
use crate::pitch::PitchClass;
use crate::resolve::{ChordSpec, ProgressionEntry, resolve_progression};
use crate::scale::ScaleType;
use serde::{Deserialize, Serialize};

/// Default diatonic triad quality at each major-scale degree (1..=7).
const MAJOR_DEGREE_QUALITIES: [ChordType; 7] = [
    ChordType::Major,
    ChordType::Minor,
    ChordType::Minor,
    ChordType::Major,
    ChordType::Major,
    ChordType::Minor,
    ChordType::Diminished,
];

/// One step of a formula: roman-numeral label, major-scale degree, and an
/// optional quality override.
struct FormulaStep {
    label: &'static str,
    degree: u8,
    quality: Option<ChordType>,
}

const fn step(label: &'static str, degree: u8, quality: Option<ChordType>) -> FormulaStep {
    FormulaStep {
        label,
        degree,
        quality,
    }
}

/// A named progression formula from the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonicFormula {
    /// Twelve-bar-blues style block: I, V7, I7, IV.
    Block,
    /// Diatonic circle: I, vi, ii, V7.
    Circle,
    /// I, IV, V7 — the guajira cadence.
    Guajira,
    /// Relative-minor block: vi, VI7, ii, III7.
    MinorBlock,
}

impl HarmonicFormula {
    /// Every formula in the catalog.
    pub const ALL: [HarmonicFormula; 4] = [
        HarmonicFormula::Block,
        HarmonicFormula::Circle,
        HarmonicFormula::Guajira,
        HarmonicFormula::MinorBlock,
    ];

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            HarmonicFormula::Block => "Block",
            HarmonicFormula::Circle => "Circle",
            HarmonicFormula::Guajira => "Guajira",
            HarmonicFormula::MinorBlock => "Minor Block",
        }
    }

    fn steps(self) -> &'static [FormulaStep] {
        const BLOCK: &[FormulaStep] = &[
            step("I", 1, None),
            step("V7", 5, Some(ChordType::Dominant7)),
            step("I7", 1, Some(ChordType::Dominant7)),
            step("IV", 4, None),
        ];
        const CIRCLE: &[FormulaStep] = &[
            step("I", 1, None),
            step("vi", 6, None),
            step("ii", 2, None),
            step("V7", 5, Some(ChordType::Dominant7)),
        ];
        const GUAJIRA: &[FormulaStep] = &[
            step("I", 1, None),
            step("IV", 4, None),
            step("V7", 5, Some(ChordType::Dominant7)),
        ];
        const MINOR_BLOCK: &[FormulaStep] = &[
            step("vi", 6, None),
            step("VI7", 6, Some(ChordType::Dominant7)),
            step("ii", 2, None),
            step("III7", 3, Some(ChordType::Dominant7)),
        ];
        match self {
            HarmonicFormula::Block => BLOCK,
            HarmonicFormula::Circle => CIRCLE,
            HarmonicFormula::Guajira => GUAJIRA,
            HarmonicFormula::MinorBlock => MINOR_BLOCK,
        }
    }
}

/// Root of a major-scale degree (1..=7) relative to a key. This is the
/// fixed reference frame shared by the formula catalog and the notation
/// parser; it is independent of harmonization.
pub fn degree_root(key: PitchClass, degree: u8) -> PitchClass {
    let majors = ScaleType::Major.intervals();
    key.transpose(majors[((degree - 1) % 7) as usize])
}

/// Default diatonic major-scale quality for a degree (1..=7).
pub fn degree_quality(degree: u8) -> ChordType {
    MAJOR_DEGREE_QUALITIES[((degree - 1) % 7) as usize]
}

/// Build a named progression in a key, voiced by the shared resolver.
pub fn progression(root: PitchClass, formula: HarmonicFormula) -> Vec<ProgressionEntry> {
    let specs: Vec<ChordSpec> = formula
        .steps()
        .iter()
        .map(|s| ChordSpec {
            label: s.label.to_string(),
            root: degree_root(root, s.degree),
            chord_type: s.quality.unwrap_or_else(|| degree_quality(s.degree)),
        })
        .collect();

    resolve_progression(root, &specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots(entries: &[ProgressionEntry]) -> Vec<PitchClass> {
        entries.iter().map(|e| e.root_note).collect()
    }

    fn types(entries: &[ProgressionEntry]) -> Vec<ChordType> {
        entries.iter().map(|e| e.chord_type).collect()
    }

    #[test]
    fn test_degree_root_major_frame() {
        assert_eq!(degree_root(PitchClass::C, 1), PitchClass::C);
        assert_eq!(degree_root(PitchClass::C, 4), PitchClass::F);
        assert_eq!(degree_root(PitchClass::C, 5), PitchClass::G);
        assert_eq!(degree_root(PitchClass::A, 3), PitchClass::CSharp);
    }

    #[test]
    fn test_circle_in_c() {
        let entries = progression(PitchClass::C, HarmonicFormula::Circle);
        assert_eq!(
            roots(&entries),
            vec![PitchClass::C, PitchClass::A, PitchClass::D, PitchClass::G]
        );
        assert_eq!(
            types(&entries),
            vec![
                ChordType::Major,
                ChordType::Minor,
                ChordType::Minor,
                ChordType::Dominant7,
            ]
        );
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["I", "vi", "ii", "V7"]);
    }

    #[test]
    fn test_block_in_f_sharp() {
        let entries = progression(PitchClass::FSharp, HarmonicFormula::Block);
        assert_eq!(
            roots(&entries),
            vec![
                PitchClass::FSharp,
                PitchClass::CSharp,
                PitchClass::FSharp,
                PitchClass::B,
            ]
        );
        assert_eq!(
            types(&entries),
            vec![
                ChordType::Major,
                ChordType::Dominant7,
                ChordType::Dominant7,
                ChordType::Major,
            ]
        );
        // Voice leading: V7 sits in first inversion so the bass steps
        // from F# down to F (spelled E#).
        assert_eq!(
            entries[1].notes,
            vec![
                PitchClass::F,
                PitchClass::GSharp,
                PitchClass::B,
                PitchClass::CSharp,
            ]
        );
    }

    #[test]
    fn test_guajira_in_c() {
        let entries = progression(PitchClass::C, HarmonicFormula::Guajira);
        assert_eq!(
            roots(&entries),
            vec![PitchClass::C, PitchClass::F, PitchClass::G]
        );
        assert_eq!(
            types(&entries),
            vec![ChordType::Major, ChordType::Major, ChordType::Dominant7]
        );
    }

    #[test]
    fn test_minor_block_in_c() {
        let entries = progression(PitchClass::C, HarmonicFormula::MinorBlock);
        assert_eq!(
            roots(&entries),
            vec![PitchClass::A, PitchClass::A, PitchClass::D, PitchClass::E]
        );
        assert_eq!(entries[1].chord_type, ChordType::Dominant7);
        assert_eq!(entries[1].label, "VI7");
    }
}
