//! Built-in fixes and their family ids.

mod change_signature;
mod modifiers;

pub use change_signature::change_function_signature;
pub use modifiers::{add_modifier, make_overridden_member_open, remove_modifier};

use kfix_types::Diagnostic;

use crate::{FixContext, FunctionDeclaration};

pub const CHANGE_FUNCTION_SIGNATURE: &str = "change-function-signature";
pub const REMOVE_MODIFIER: &str = "remove-modifier";
pub const ADD_MODIFIER: &str = "add-modifier";
pub const MAKE_OVERRIDDEN_OPEN: &str = "make-overridden-open";

/// The function declaration a diagnostic is anchored to.
fn anchored_function(ctx: &FixContext<'_>, diagnostic: &Diagnostic) -> Option<FunctionDeclaration> {
    let span = diagnostic.span?;
    let declaration = ctx.declarations.function_at(ctx.file, span.start);
    if declaration.is_none() {
        tracing::debug!(
            kind = %diagnostic.kind,
            offset = span.start,
            "no function declaration at diagnostic anchor"
        );
    }
    declaration
}
