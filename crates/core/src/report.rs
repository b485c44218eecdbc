//! Text output for the demonstration.
//!
//! All writers take any `io::Write` so the binary can hand them a locked
//! stdout and tests can hand them a `Vec<u8>`. Output depends only on the
//! arguments: two calls with the same inputs produce identical bytes.
//!
//! # Sections
//! - [`write_usage`]: banner, notation tokens, examples, closing note
//! - [`write_conventional`]: five conventionally typed variables
//! - [`write_reinterpretations`]: one container, five readings

use std::io::Write;

use tracing::debug;

use crate::container::GenericContainer;
use crate::error::Result;
use crate::literals::{unpack, Concept};
use crate::notation::Notation;

const RULE: &str = "═══════════════════════════════════════════════════════════════";

/// Column where reinterpreted values start, after the `→ ` marker.
const VALUE_COLUMN: usize = 58;

/// Write the help text for `program_name`.
pub fn write_usage<W: Write>(out: &mut W, program_name: &str) -> Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "    EXPLORING THE TRUE NATURE OF VARIABLES")?;
    writeln!(out, "    An Educational Experiment on Type Independence")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "Usage: {program_name} [notation]")?;
    writeln!(out)?;
    writeln!(out, "Available notations (all represent identical data):")?;
    for notation in Notation::ALL {
        let token = if notation == Notation::default() {
            format!("{} (default)", notation.token())
        } else {
            notation.token().to_string()
        };
        writeln!(
            out,
            "  {token:<13} - {:<20} ({}...)",
            notation.description(),
            notation.prefix()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    for notation in Notation::ALL {
        writeln!(
            out,
            "  {program_name} {:<6} # Same data, {notation} notation",
            notation.token()
        )?;
    }
    writeln!(out, "  {program_name} {:<6} # Show this help message", "help")?;
    writeln!(out)?;
    writeln!(out, "EDUCATIONAL DISCOVERY:")?;
    writeln!(out, "This experiment reveals that data types (int, float, char, etc.)")?;
    writeln!(out, "are human abstractions. All data is fundamentally identical -")?;
    writeln!(out, "just bit patterns that can be interpreted in multiple ways.")?;
    writeln!(out, "Variables are type-independent; types exist only to reduce")?;
    writeln!(out, "cognitive load for programmers, not computational necessity.")?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

/// Write the five conventionally typed sample variables.
pub fn write_conventional<W: Write>(out: &mut W) -> Result<()> {
    let my_int: i32 = 42;
    let my_float: f32 = 2.7;
    let my_char: char = 'A';
    let my_string: &str = "ABC";
    let my_bool: bool = true;

    writeln!(out, "Programming languages present these as 'different' types:")?;
    conventional_line(out, format!("int: {my_int}"), "a 'number'")?;
    conventional_line(out, format!("float: {my_float:.2}"), "a 'decimal number'")?;
    conventional_line(out, format!("char: {my_char}"), "a 'character'")?;
    conventional_line(out, format!("string: {my_string}"), "'text'")?;
    conventional_line(out, format!("_Bool: {}", u8::from(my_bool)), "'true/false'")?;
    writeln!(out)?;
    Ok(())
}

fn conventional_line<W: Write>(out: &mut W, labeled: String, appears_as: &str) -> Result<()> {
    writeln!(out, "  {labeled:<16} ← Appears to be {appears_as}")?;
    Ok(())
}

/// Assign each concept's literal into one shared container and print every
/// reading of it.
///
/// `notation` decides which of the four equal literals is assigned; the
/// printed values are the same for every notation.
pub fn write_reinterpretations<W: Write>(out: &mut W, notation: Notation) -> Result<()> {
    writeln!(
        out,
        "Using ANY generic type (here: u32) as universal data container with {} notation:",
        notation.label()
    )?;
    writeln!(out, "Showing that ONE arbitrary type can represent ALL data forms!")?;
    writeln!(out, "(Could be u8, u64, [u8; 4], or any other - the choice is not essential!)")?;
    writeln!(out)?;

    let mut container = GenericContainer::new();

    for concept in Concept::ALL {
        let bits = concept.literals().select(notation);
        container.assign(bits);
        debug!(%concept, %notation, literal = %notation.render(bits), "assigned container");

        match concept {
            Concept::Integer => {
                reading_line(out, concept, "container read as integer", container.as_i32())?;
            }
            Concept::Float => {
                let value = format!("{:.2}", container.as_f32());
                reading_line(out, concept, "same container read as float", value)?;
            }
            Concept::Character => {
                let glyph = container.as_char();
                reading_line(out, concept, "same container read as character", glyph)?;
            }
            Concept::String => {
                let mask = unpack::MASK_255.select(notation);
                let extracted: String = unpack::SHIFTS
                    .iter()
                    .map(|shift| char::from(container.extract_byte(shift.select(notation), mask)))
                    .collect();
                reading_line(out, concept, "same container extracted as text", extracted)?;
                reading_line(out, concept, "same container read directly", container.as_text())?;
            }
            Concept::Boolean => {
                let truth = u8::from(container.as_bool());
                reading_line(out, concept, "same container read as truth value", truth)?;
            }
        }
    }
    Ok(())
}

fn reading_line<W: Write>(
    out: &mut W,
    concept: Concept,
    reading: &str,
    value: impl std::fmt::Display,
) -> Result<()> {
    let label = format!("'{concept}' concept, {reading}:");
    writeln!(out, "→ {label:<width$}{value}", width = VALUE_COLUMN)?;
    Ok(())
}

/// Write the full demonstration: conventional variables, then the
/// reinterpretation sequence.
pub fn write_demonstration<W: Write>(out: &mut W, notation: Notation) -> Result<()> {
    write_conventional(out)?;
    write_reinterpretations(out, notation)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_usage_lists_tokens() {
        let text = render(|out| write_usage(out, "bitview"));

        assert!(text.contains("Usage: bitview [notation]"));
        assert!(text.contains("  bin (default) - Binary notation      (0b...)"));
        assert!(text.contains("  hex           - Hexadecimal notation (0x...)"));
        assert!(text.contains("  bitview oct    # Same data, octal notation"));
        assert!(text.contains("  bitview help   # Show this help message"));
        assert!(text.contains("EDUCATIONAL DISCOVERY:"));
    }

    #[test]
    fn test_conventional_values() {
        let text = render(write_conventional::<Vec<u8>>);

        for expected in ["int: 42", "float: 2.70", "char: A", "string: ABC", "_Bool: 1"] {
            assert!(text.contains(expected), "missing {expected:?} in:\n{text}");
        }
    }

    #[test]
    fn test_reinterpretation_lines_end_with_values() {
        let text = render(|out| write_reinterpretations(out, Notation::Binary));
        let endings: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with('→'))
            .map(|l| l.rsplit(' ').next().unwrap_or_default())
            .collect();

        assert_eq!(endings, vec!["42", "2.70", "A", "ABC", "ABC", "1"]);
    }

    #[test]
    fn test_banner_names_notation() {
        let text = render(|out| write_reinterpretations(out, Notation::Octal));
        assert!(text.contains("with OCTAL notation:"));
    }

    #[test]
    fn test_values_independent_of_notation() {
        let readings = |notation: Notation| {
            render(|out| write_reinterpretations(out, notation))
                .lines()
                .filter(|l| l.starts_with('→'))
                .map(str::to_owned)
                .collect::<Vec<_>>()
        };

        let baseline = readings(Notation::Binary);
        for notation in Notation::ALL {
            assert_eq!(readings(notation), baseline, "{notation} differs");
        }
    }
}
