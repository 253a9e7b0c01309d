//! Diagnostic-driven quick fixes.
//!
//! A host reports compiler diagnostics together with a [`FixContext`] (file
//! text, declaration lookup, type equality, config). The [`QuickFixRegistry`]
//! maps each diagnostic kind to the fix factories that can address it and
//! collects their [`QuickFix`]es. Fixes never touch the file themselves; they
//! return text edits for the host to apply.

mod context;
mod fix;
pub mod fixes;
mod registry;

pub use context::{
    DeclarationProvider, FixContext, FunctionDeclaration, InMemoryDeclarations, Modifier,
};
pub use fix::QuickFix;
pub use registry::{FixFactory, QuickFixRegistry};
