//! Config directive injection
//!
//! Inserts a fixed line right after the first class header matching the
//! marker. Detection is marker-based, so a directive that is already
//! present gets inserted again.

use super::region::ClassRegion;

/// Result of injecting the directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injected {
    /// The rewritten text
    pub text: String,
    /// 1-based output line of the inserted directive, if the marker was found
    pub inserted_at: Option<usize>,
}

/// Insert `directive` after the first line opening the class `marker`
pub fn inject(source: &str, marker: &str, directive: &str) -> Injected {
    let region = ClassRegion::new(marker);
    let mut out: Vec<&str> = Vec::new();
    let mut inserted_at = None;

    for line in source.split('\n') {
        out.push(line);
        if inserted_at.is_none() && region.is_marker(line) {
            out.push(directive);
            inserted_at = Some(out.len());
        }
    }

    Injected {
        text: out.join("\n"),
        inserted_at,
    }
}
