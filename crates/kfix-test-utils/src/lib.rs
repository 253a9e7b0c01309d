//! Helpers shared by kfix tests.
//!
//! Fixtures are plain Kotlin snippets with inline markers:
//! - `/*caret*/` marks a cursor offset,
//! - `/*start*/` ... `/*end*/` mark a selection.

mod fixtures;
mod scan;

pub use fixtures::{apply_fix, extract_caret, extract_range};
pub use scan::scan_function;
