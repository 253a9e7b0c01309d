use kfix_core::{Span, TextEdit, WorkspaceEdit};
use kfix_signature::{signature_changes, SignatureChange};
use kfix_types::Diagnostic;

use super::{anchored_function, CHANGE_FUNCTION_SIGNATURE};
use crate::{FixContext, FunctionDeclaration, QuickFix};

/// For `override` functions that override nothing: offer to change the
/// signature to match each supertype function of the same name.
pub fn change_function_signature(ctx: &FixContext<'_>, diagnostic: &Diagnostic) -> Vec<QuickFix> {
    let Some(declaration) = anchored_function(ctx, diagnostic) else {
        return Vec::new();
    };

    let changes = signature_changes(
        ctx.declarations.hierarchy(),
        ctx.types,
        &declaration.descriptor,
    );
    if changes.is_empty() {
        tracing::debug!(
            function = %declaration.descriptor.name,
            "no supertype function to change the signature to"
        );
        return Vec::new();
    }

    let is_preferred = changes.len() == 1;
    let short: Vec<String> = changes.iter().map(SignatureChange::render).collect();
    changes
        .iter()
        .zip(&short)
        .take(ctx.config.max_signature_candidates)
        .map(|(change, rendered)| QuickFix {
            title: format!(
                "Change function signature to '{}'",
                title_signature(change, rendered, &short)
            ),
            family: CHANGE_FUNCTION_SIGNATURE,
            file: ctx.file,
            edit: WorkspaceEdit::single_file(ctx.file, signature_edits(ctx, &declaration, change)),
            is_preferred,
        })
        .collect()
}

/// The short rendering, unless another change renders the same way.
fn title_signature(change: &SignatureChange, rendered: &str, all: &[String]) -> String {
    if all.iter().filter(|other| *other == rendered).count() > 1 {
        change.render_qualified()
    } else {
        rendered.to_owned()
    }
}

fn signature_edits(
    ctx: &FixContext<'_>,
    declaration: &FunctionDeclaration,
    change: &SignatureChange,
) -> Vec<TextEdit> {
    let params_span = declaration.parameter_list_span;
    let mut edits = vec![TextEdit::replace(params_span, change.source_parameter_list())];

    let old = &declaration.descriptor.return_type;
    let new = &change.return_type;
    if ctx.types.types_equal(old, new) {
        return edits;
    }

    match declaration.return_type_span {
        // `fun f(): T` -> `fun f()`
        Some(span) if new.is_unit() => {
            edits.push(TextEdit::delete(Span::new(params_span.end, span.end)));
        }
        Some(span) => edits.push(TextEdit::replace(span, change.source_return_type())),
        None if !new.is_unit() => {
            edits.push(TextEdit::insert(
                params_span.end,
                format!(": {}", change.source_return_type()),
            ));
        }
        None => {}
    }
    edits
}
