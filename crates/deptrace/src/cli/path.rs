//! `deps path` command implementation.

use std::io::Write;

use deptrace::{DependencySource, Walker};

use super::OutputMode;
use super::display::{print_header, print_json, print_path};

/// Run the path command.
pub fn run<S: DependencySource, W: Write>(
    walker: &Walker<S>,
    root: &str,
    target: &str,
    mode: OutputMode,
    out: &mut W,
) -> Result<(), deptrace::Error> {
    if mode == OutputMode::Text {
        print_header(out, &format!("Finding path from {root:?} to {target:?}..."))?;
        out.flush()?;
    }

    let path = walker.find_path(root, target)?;

    match mode {
        OutputMode::Text => print_path(out, &path)?,
        OutputMode::Json => print_json(out, &path)?,
    }
    Ok(())
}
