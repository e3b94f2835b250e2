//! Patch module
//!
//! Pure line transforms over the target file's text, plus the thin
//! filesystem shell the binaries call.

pub mod annotator;
pub mod file;
pub mod injector;
pub mod region;

// Re-exports
pub use annotator::{annotate, Annotated, Annotation, TypeTag, ANY_IMPORT};
pub use file::{annotate_file, inject_file};
pub use injector::{inject, Injected};
pub use region::ClassRegion;
