//! Settings annotator
//!
//! Rewrites bare `name = literal` lines inside the class region into
//! `name: type = literal`, inferring the type from the literal.

use super::region::ClassRegion;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Import required once any field is annotated as `Any`
pub const ANY_IMPORT: &str = "from typing import Any";

static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\s+)([a-zA-Z0-9_]+)\s*=\s*(["'].*?["']|\d+|True|False|None)(.*?)$"#)
        .expect("assignment pattern is valid")
});

/// Type inferred from a literal's surface form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Bool,
    Any,
    Int,
    Str,
}

impl TypeTag {
    /// Infer the tag for a literal accepted by the assignment pattern
    pub fn from_literal(literal: &str) -> Self {
        match literal {
            "True" | "False" => TypeTag::Bool,
            "None" => TypeTag::Any,
            _ if !literal.is_empty() && literal.chars().all(char::is_numeric) => TypeTag::Int,
            _ => TypeTag::Str,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Any => "Any",
            TypeTag::Int => "int",
            TypeTag::Str => "str",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rewritten assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// 1-based line number in the input text
    pub line: usize,
    pub field: String,
    pub literal: String,
    pub type_tag: TypeTag,
}

/// Result of annotating a source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    /// The rewritten text
    pub text: String,
    /// Every assignment that received an annotation, in input order
    pub annotations: Vec<Annotation>,
    /// Whether the `Any` import was prepended
    pub import_added: bool,
    /// Whether a line opening the class region was seen
    pub marker_found: bool,
}

impl Annotated {
    /// Returns true if the text differs from the input
    pub fn changed(&self) -> bool {
        !self.annotations.is_empty() || self.import_added
    }
}

/// Annotate a single line, if it is an eligible assignment
///
/// Returns the rewritten line together with the field, literal and tag.
pub fn annotate_line(line: &str) -> Option<(String, String, String, TypeTag)> {
    let caps = ASSIGNMENT.captures(line)?;
    let field = &caps[2];
    if field.contains(':') {
        return None;
    }

    let literal = &caps[3];
    let tag = TypeTag::from_literal(literal);
    let rewritten = format!("{}{}: {} = {}{}", &caps[1], field, tag, literal, &caps[4]);

    Some((rewritten, field.to_string(), literal.to_string(), tag))
}

/// Annotate every bare assignment inside the class opened by `marker`
///
/// The `Any` import is prepended at most once, and only when the input
/// does not already contain it.
pub fn annotate(source: &str, marker: &str) -> Annotated {
    let mut region = ClassRegion::new(marker);
    let mut out: Vec<String> = Vec::new();
    let mut annotations = Vec::new();
    let mut needs_import = false;
    let mut marker_found = false;

    for (idx, line) in source.split('\n').enumerate() {
        if !region.advance(line) {
            out.push(line.to_string());
            continue;
        }
        marker_found = true;

        match annotate_line(line) {
            Some((rewritten, field, literal, type_tag)) => {
                log::debug!("line {}: {} -> {}", idx + 1, field, type_tag);
                if type_tag == TypeTag::Any && !source.contains(ANY_IMPORT) {
                    needs_import = true;
                }
                annotations.push(Annotation {
                    line: idx + 1,
                    field,
                    literal,
                    type_tag,
                });
                out.push(rewritten);
            }
            None => out.push(line.to_string()),
        }
    }

    if needs_import {
        out.insert(0, ANY_IMPORT.to_string());
    }

    Annotated {
        text: out.join("\n"),
        annotations,
        import_added: needs_import,
        marker_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "class Settings(BaseSettings)";

    fn settings(body: &str) -> String {
        format!("class Settings(BaseSettings):\n{}\n", body)
    }

    #[test]
    fn test_infers_str() {
        let out = annotate(&settings(r#"    host = "localhost""#), MARKER);
        assert!(out.text.contains(r#"    host: str = "localhost""#));
        assert_eq!(out.annotations[0].type_tag, TypeTag::Str);
        assert!(out.marker_found);
    }

    #[test]
    fn test_missing_marker_reported() {
        let source = "class Other:\n    a = 1\n";
        let out = annotate(source, MARKER);
        assert!(!out.marker_found);
        assert!(!out.changed());
        assert_eq!(out.text, source);
    }

    #[test]
    fn test_infers_single_quoted_str() {
        let out = annotate(&settings("    impl = 'duckdb'"), MARKER);
        assert!(out.text.contains("    impl: str = 'duckdb'"));
    }

    #[test]
    fn test_infers_int() {
        let out = annotate(&settings("    port = 8000"), MARKER);
        assert!(out.text.contains("    port: int = 8000"));
    }

    #[test]
    fn test_infers_bool() {
        let out = annotate(&settings("    a = True\n    b = False"), MARKER);
        assert!(out.text.contains("    a: bool = True"));
        assert!(out.text.contains("    b: bool = False"));
    }

    #[test]
    fn test_infers_any_and_prepends_import() {
        let out = annotate(&settings("    token = None"), MARKER);
        assert!(out.import_added);
        assert!(out.text.starts_with("from typing import Any\nclass Settings"));
        assert!(out.text.contains("    token: Any = None"));
    }

    #[test]
    fn test_import_inserted_once_for_many_none() {
        let out = annotate(&settings("    a = None\n    b = None\n    c = None"), MARKER);
        assert_eq!(out.text.matches(ANY_IMPORT).count(), 1);
        assert_eq!(out.annotations.len(), 3);
    }

    #[test]
    fn test_existing_import_not_duplicated() {
        let source = format!("{}\n\n{}", ANY_IMPORT, settings("    a = None\n    b = None"));
        let out = annotate(&source, MARKER);
        assert!(!out.import_added);
        assert_eq!(out.text.matches(ANY_IMPORT).count(), 1);
    }

    #[test]
    fn test_preserves_indent_and_trailing() {
        let out = annotate(&settings("\t  retries = 3  # max attempts"), MARKER);
        assert!(out.text.contains("\t  retries: int = 3  # max attempts"));
    }

    #[test]
    fn test_normalizes_spacing_around_equals() {
        let out = annotate(&settings("    port=8000"), MARKER);
        assert!(out.text.contains("    port: int = 8000"));
    }

    #[test]
    fn test_already_annotated_untouched() {
        let source = settings("    port: int = 8000");
        let out = annotate(&source, MARKER);
        assert_eq!(out.text, source);
        assert!(!out.changed());
    }

    #[test]
    fn test_outside_region_untouched() {
        let source = "x = 1\n    y = 2\nclass Settings(BaseSettings):\n    z = 3\nclass Other:\n    w = 4\n";
        let out = annotate(source, MARKER);
        assert_eq!(
            out.text,
            "x = 1\n    y = 2\nclass Settings(BaseSettings):\n    z: int = 3\nclass Other:\n    w = 4\n"
        );
        assert_eq!(out.annotations.len(), 1);
        assert_eq!(out.annotations[0].line, 4);
    }

    #[test]
    fn test_non_matching_lines_verbatim() {
        let body = "    \"\"\"Docstring.\"\"\"\n    chroma_api_impl = os.environ.get('X')\n    def f(self): pass\n    \n";
        let source = settings(body);
        let out = annotate(&source, MARKER);
        assert_eq!(out.text, source);
    }

    #[test]
    fn test_decimal_literal_tagged_int() {
        let out = annotate(&settings("    ratio = 10.5"), MARKER);
        assert!(out.text.contains("    ratio: int = 10.5"));
    }

    #[test]
    fn test_idempotent() {
        let source = settings("    a = None\n    b = 'x'\n    c = 1\n    d = True");
        let once = annotate(&source, MARKER);
        let twice = annotate(&once.text, MARKER);
        assert_eq!(once.text, twice.text);
        assert!(!twice.changed());
    }

    #[test]
    fn test_crlf_kept_in_trailing() {
        let out = annotate("class Settings(BaseSettings):\r\n    a = 1\r\n", MARKER);
        assert_eq!(out.text, "class Settings(BaseSettings):\r\n    a: int = 1\r\n");
    }

    #[test]
    fn test_annotate_line_rejects_unindented() {
        assert!(annotate_line("a = 1").is_none());
        assert!(annotate_line("    a = b").is_none());
    }
}
