//! Class region tracking
//!
//! A region opens on the line whose trimmed text starts with the class
//! marker and closes on the next line that starts another class.

const CLASS_KEYWORD: &str = "class ";

/// Line-by-line tracker for a single class body
#[derive(Debug, Clone)]
pub struct ClassRegion<'a> {
    marker: &'a str,
    inside: bool,
}

impl<'a> ClassRegion<'a> {
    /// Create a tracker for the class opened by `marker`
    pub fn new(marker: &'a str) -> Self {
        Self {
            marker,
            inside: false,
        }
    }

    /// Returns true if the line opens the tracked class
    pub fn is_marker(&self, line: &str) -> bool {
        line.trim().starts_with(self.marker)
    }

    /// Feed the next line and report whether it belongs to the region
    ///
    /// The marker line itself counts as inside.
    pub fn advance(&mut self, line: &str) -> bool {
        if self.is_marker(line) {
            self.inside = true;
        } else if self.inside && line.trim().starts_with(CLASS_KEYWORD) {
            self.inside = false;
        }
        self.inside
    }
}
