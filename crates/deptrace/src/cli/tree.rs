//! `deps tree` command implementation.

use std::io::Write;

use deptrace::{DependencySource, Walker};

use super::OutputMode;
use super::display::{print_header, print_json};

/// Run the tree command.
pub fn run<S: DependencySource, W: Write>(
    walker: &Walker<S>,
    root: &str,
    mode: OutputMode,
    out: &mut W,
) -> Result<(), deptrace::Error> {
    if mode == OutputMode::Text {
        print_header(out, &format!("Building dependency tree for {root:?}..."))?;
        out.flush()?;
    }

    let tree = walker.build_tree(root)?;

    match mode {
        OutputMode::Text => tree.render(out)?,
        OutputMode::Json => print_json(out, &tree)?,
    }
    Ok(())
}
