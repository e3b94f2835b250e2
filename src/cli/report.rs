//! Run summaries
//!
//! Formats the outcome of each utility for the terminal.

use crate::patch::{Annotated, Annotation, Injected};
use comfy_table::Table;
use std::path::Path;

/// Build a table of rewritten fields
pub fn annotation_table(annotations: &[Annotation]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Line", "Field", "Value", "Type"]);
    for annotation in annotations {
        table.add_row(vec![
            annotation.line.to_string(),
            annotation.field.clone(),
            annotation.literal.clone(),
            annotation.type_tag.to_string(),
        ]);
    }
    table
}

/// One-line summary of an annotator run
pub fn annotate_summary(path: &Path, annotated: &Annotated) -> String {
    if !annotated.changed() {
        return format!("✓ No bare Settings fields to annotate in {}", path.display());
    }

    let mut summary = format!(
        "✓ Annotated {} field(s) in {}",
        annotated.annotations.len(),
        path.display()
    );
    if annotated.import_added {
        summary.push_str(" (added `from typing import Any`)");
    }
    summary
}

/// One-line summary of an injector run
pub fn inject_summary(path: &Path, injected: &Injected) -> String {
    match injected.inserted_at {
        Some(line) => format!("✓ Inserted config directive at line {} of {}", line, path.display()),
        None => format!("✓ Class marker not found in {}; file left unchanged", path.display()),
    }
}
