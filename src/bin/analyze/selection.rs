// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Territory Selection

use std::io::{self, BufRead, Write};

use dromcom_engine::registry;

/// Used when the menu answer is not a valid choice.
pub const FALLBACK_TERRITORY: &str = "La Réunion";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub territory: String,
    /// The answer was rejected and the fallback was used instead.
    pub fell_back: bool,
}

/// Map a 1-based menu answer to a territory name.
pub fn resolve_choice(input: &str) -> Selection {
    let picked = input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| registry::TERRITORIES.get(i));

    match picked {
        Some(profile) => Selection { territory: profile.name.to_string(), fell_back: false },
        None => Selection { territory: FALLBACK_TERRITORY.to_string(), fell_back: true },
    }
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Available territories:")?;
    for (i, name) in registry::names().enumerate() {
        writeln!(out, "{}. {}", i + 1, name)?;
    }
    write!(out, "\nTerritory number to analyse: ")?;
    out.flush()
}

/// Print the menu and read one answer. A closed stdin counts as an invalid
/// answer.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Selection> {
    print_menu(out)?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let selection = resolve_choice(&line);
    if selection.fell_back {
        tracing::warn!(answer = line.trim(), "invalid choice, defaulting to {}", FALLBACK_TERRITORY);
    }
    Ok(selection)
}
