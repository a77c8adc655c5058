//! Common display utilities for CLI commands.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use deptrace::ModulePath;

/// Print the "what are we doing" line that precedes a text report.
pub fn print_header<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    writeln!(out, "{}", message.dimmed())
}

/// Print a path, one module per line.
pub fn print_path<W: Write>(out: &mut W, path: &ModulePath) -> std::io::Result<()> {
    write!(out, "{path}")
}

/// Print any serializable result as pretty JSON.
pub fn print_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<(), deptrace::Error> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
