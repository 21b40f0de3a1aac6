// Cadenza — CLI entry point.
//
// A terminal front end over the theory engine. One subcommand per engine
// operation:
//
//   cadenza scale <root> <scale>
//   cadenza chord <root> <chord> [--inversions]
//   cadenza harmonize <root> <scale> [--sevenths]
//   cadenza progression <root> <formula>
//   cadenza parse <root> <formula text...>
//
// Global flags: --flats (flat note spelling), --json (machine output).
//
// Scales: major, minor, harmonic, melodic, dorian, phrygian, lydian,
//   mixolydian, locrian, penta-major, penta-minor
// Chords: maj, min, dim, aug, maj7, m7, 7, m7b5, dim7, mmaj7, augmaj7
// Formulas: block (blues), circle, guajira, minor-block

use anyhow::{Context, Result, bail};
use cadenza_notation::parse_progression;
use cadenza_theory::chord::{Chord, ChordType};
use cadenza_theory::harmonize::harmonize;
use cadenza_theory::pitch::{PitchClass, Spelling};
use cadenza_theory::progression::{HarmonicFormula, progression};
use cadenza_theory::resolve::ProgressionEntry;
use cadenza_theory::scale::{ScaleType, scale_notes};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let json = args.iter().any(|a| a == "--json");
    let spelling = if args.iter().any(|a| a == "--flats") {
        Spelling::Flats
    } else {
        Spelling::Sharps
    };
    let positional: Vec<&str> = args[1..]
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(|a| a.as_str())
        .collect();

    let Some((&command, rest)) = positional.split_first() else {
        print_usage();
        bail!("no command given");
    };

    match command {
        "scale" => {
            let (root, name) = two_args(rest, "scale <root> <scale>")?;
            let scale = parse_scale(name)?;
            let notes = scale_notes(root, scale);
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else {
                println!("--- {} {} Scale ---", root.name(spelling), scale.label());
                println!("{}", render_notes(&notes, spelling));
            }
        }
        "chord" => {
            let (root, name) = two_args(rest, "chord <root> <chord>")?;
            let chord_type = parse_chord(name)?;
            let chord = Chord::build(root, chord_type);
            if json {
                println!("{}", serde_json::to_string_pretty(&chord)?);
            } else {
                println!(
                    "--- {} {} Chord ---",
                    root.name(spelling),
                    chord_type.label()
                );
                if args.iter().any(|a| a == "--inversions") {
                    for (i, voicing) in chord.voicings().iter().enumerate() {
                        let title = match i {
                            0 => "Root".to_string(),
                            n => format!("Inv {}", n),
                        };
                        println!("{}:\t{}", title, render_notes(voicing, spelling));
                    }
                } else {
                    println!("{}", render_notes(&chord.notes, spelling));
                }
            }
        }
        "harmonize" => {
            let (root, name) = two_args(rest, "harmonize <root> <scale>")?;
            let scale = parse_scale(name)?;
            let sevenths = args.iter().any(|a| a == "--sevenths");
            let harmony = harmonize(root, scale, sevenths)
                .with_context(|| format!("cannot harmonize {} {}", root, scale.label()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&harmony)?);
            } else {
                const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];
                println!(
                    "--- {} {} Harmonization ---",
                    root.name(spelling),
                    scale.label()
                );
                for degree in &harmony {
                    println!(
                        "{}\t{}{}\t{}",
                        NUMERALS[degree.degree - 1],
                        degree.root_note.name(spelling),
                        degree.chord_type.symbol(),
                        render_notes(&degree.notes, spelling)
                    );
                }
            }
        }
        "progression" => {
            let (root, name) = two_args(rest, "progression <root> <formula>")?;
            let formula = parse_formula(name)?;
            let entries = progression(root, formula);
            print_progression(&entries, formula.label(), spelling, json)?;
        }
        "parse" => {
            let Some((&root_name, formula_parts)) = rest.split_first() else {
                bail!("usage: cadenza parse <root> <formula text...>");
            };
            let root = PitchClass::parse(root_name)?;
            let formula_text = formula_parts.join(" ");
            let entries = parse_progression(root, &formula_text)
                .with_context(|| format!("cannot parse formula '{}'", formula_text))?;
            print_progression(&entries, &formula_text, spelling, json)?;
        }
        other => {
            print_usage();
            bail!("unknown command '{}'", other);
        }
    }

    Ok(())
}

fn two_args<'a>(rest: &[&'a str], usage: &str) -> Result<(PitchClass, &'a str)> {
    match rest {
        [root, name] => Ok((PitchClass::parse(root)?, *name)),
        _ => bail!("usage: cadenza {}", usage),
    }
}

fn print_progression(
    entries: &[ProgressionEntry],
    title: &str,
    spelling: Spelling,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        println!("--- {} ---", title);
        for entry in entries {
            println!(
                "{}\t{}{}\t{}",
                entry.label,
                entry.root_note.name(spelling),
                entry.chord_type.symbol(),
                render_notes(&entry.notes, spelling)
            );
        }
    }
    Ok(())
}

fn render_notes(notes: &[PitchClass], spelling: Spelling) -> String {
    notes
        .iter()
        .map(|n| n.name(spelling))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_scale(name: &str) -> Result<ScaleType> {
    let scale = match name.to_lowercase().as_str() {
        "major" | "maj" => ScaleType::Major,
        "minor" | "natural" | "natural-minor" => ScaleType::NaturalMinor,
        "harmonic" | "harmonic-minor" => ScaleType::HarmonicMinor,
        "melodic" | "melodic-minor" => ScaleType::MelodicMinor,
        "dorian" => ScaleType::Dorian,
        "phrygian" => ScaleType::Phrygian,
        "lydian" => ScaleType::Lydian,
        "mixolydian" => ScaleType::Mixolydian,
        "locrian" => ScaleType::Locrian,
        "penta-major" | "pentatonic-major" => ScaleType::PentatonicMajor,
        "penta-minor" | "pentatonic-minor" => ScaleType::PentatonicMinor,
        _ => bail!("unknown scale '{}'", name),
    };
    Ok(scale)
}

fn parse_chord(name: &str) -> Result<ChordType> {
    let chord = match name.to_lowercase().as_str() {
        "major" | "maj" => ChordType::Major,
        "minor" | "min" | "m" => ChordType::Minor,
        "dim" => ChordType::Diminished,
        "aug" => ChordType::Augmented,
        "maj7" => ChordType::Major7,
        "min7" | "m7" => ChordType::Minor7,
        "dom7" | "7" => ChordType::Dominant7,
        "m7b5" | "half-diminished" => ChordType::HalfDiminished7,
        "dim7" => ChordType::Diminished7,
        "mmaj7" | "m(maj7)" => ChordType::MinorMajor7,
        "augmaj7" | "aug(maj7)" => ChordType::AugmentedMajor7,
        _ => bail!("unknown chord '{}'", name),
    };
    Ok(chord)
}

fn parse_formula(name: &str) -> Result<HarmonicFormula> {
    let formula = match name.to_lowercase().as_str() {
        "block" | "blues" => HarmonicFormula::Block,
        "circle" => HarmonicFormula::Circle,
        "guajira" => HarmonicFormula::Guajira,
        "minor-block" => HarmonicFormula::MinorBlock,
        _ => bail!("unknown progression formula '{}'", name),
    };
    Ok(formula)
}

fn print_usage() {
    eprintln!("usage: cadenza <command> [args] [--flats] [--json]");
    eprintln!("  scale <root> <scale>");
    eprintln!("  chord <root> <chord> [--inversions]");
    eprintln!("  harmonize <root> <scale> [--sevenths]");
    eprintln!("  progression <root> <formula>");
    eprintln!("  parse <root> <formula text...>");
}
