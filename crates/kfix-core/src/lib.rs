//! Core shared types for kfix.
//!
//! Text positions, byte spans, file handles and the edit model that quick fixes
//! produce. This crate knows nothing about Kotlin semantics.

pub mod edit;
pub mod text;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use edit::{apply_text_edits, normalize_text_edits, EditError, TextEdit, WorkspaceEdit};
pub use text::{LineCol, LineIndex, Position, Range, TextRange, TextSize};

/// Opaque handle for a source file known to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileId(u32);

impl FileId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn to_raw(self) -> u32 {
        self.0
    }
}

/// A byte-span into a source string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Whether two spans overlap.
    ///
    /// A zero-length span is treated as a cursor: it intersects a span that
    /// contains its offset.
    pub fn intersects(self, other: Span) -> bool {
        let (a_start, a_end) = ordered(self);
        let (b_start, b_end) = ordered(other);

        if a_start == a_end {
            return (b_start <= a_start && a_start < b_end) || (b_start == b_end && a_start == b_start);
        }
        if b_start == b_end {
            return a_start <= b_start && b_start < a_end;
        }

        a_start < b_end && b_start < a_end
    }

    pub fn to_text_range(self) -> TextRange {
        TextRange::new(
            TextSize::from(self.start as u32),
            TextSize::from(self.end as u32),
        )
    }
}

fn ordered(span: Span) -> (usize, usize) {
    if span.start <= span.end {
        (span.start, span.end)
    } else {
        (span.end, span.start)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span({}..{})", self.start, self.end)
    }
}

/// An identifier (function, parameter or type name).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Name(smol_str::SmolStr);

impl Name {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(smol_str::SmolStr::new(text))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
