//! `deps paths` command implementation.

use std::io::Write;

use deptrace::{DependencySource, Walker};

use super::OutputMode;
use super::display::{print_header, print_json, print_path};

/// Run the paths command.
///
/// Finding nothing is not an error: the text report is then just the header.
pub fn run<S: DependencySource, W: Write>(
    walker: &Walker<S>,
    root: &str,
    target: &str,
    mode: OutputMode,
    out: &mut W,
) -> Result<(), deptrace::Error> {
    if mode == OutputMode::Text {
        print_header(
            out,
            &format!("Finding all paths from {root:?} to {target:?}..."),
        )?;
        out.flush()?;
    }

    let paths = walker.find_all_paths(root, target)?;

    match mode {
        OutputMode::Text => {
            for path in &paths {
                writeln!(out)?;
                print_path(out, path)?;
            }
        }
        OutputMode::Json => print_json(out, &paths)?,
    }
    Ok(())
}
