//! Help text and command listings.

use std::io::{self, Write};

use crate::{
    catalog::{CommandCatalog, CommandRef},
    cli::OPTIONS,
};

const MARGIN: &str = "      ";
/// Column where usage text starts, counted with the margin as 8 characters.
const USAGE_COLUMN: usize = 31;

/// Write one line per command: margin, padded name, usage.
///
/// # Errors
/// Returns any error from the writer.
pub fn write_listing<'a>(
    out: &mut dyn Write,
    commands: impl IntoIterator<Item = &'a CommandRef>,
) -> io::Result<()> {
    for command in commands {
        let pad = USAGE_COLUMN.saturating_sub(command.name().len() + 8);
        writeln!(out, "{MARGIN}{}{:pad$}{}", command.name(), "", command.usage())?;
    }
    Ok(())
}

/// Write the full help screen: usage banner, global options, common commands.
///
/// # Errors
/// Returns any error from the writer.
pub fn write_help(out: &mut dyn Write, catalog: &CommandCatalog) -> io::Result<()> {
    let banner: Vec<String> = OPTIONS
        .iter()
        .map(|spec| format!("[{}]", spec.spellings().collect::<Vec<_>>().join("|")))
        .collect();
    writeln!(out, "usage: git {}", banner.join(" "))?;
    writeln!(out, "COMMAND [ARGS]")?;
    writeln!(out)?;

    for spec in OPTIONS {
        let spellings = spec.spellings().collect::<Vec<_>>().join(", ");
        writeln!(out, "  {spellings:<27}{}", spec.description)?;
    }
    writeln!(out)?;

    writeln!(out, "The most commonly used git commands are:")?;
    write_listing(out, catalog.common())?;
    writeln!(out)?;
    writeln!(
        out,
        "See 'git help COMMAND' for more information on a specific command."
    )
}
