use kfix_core::{Span, TextEdit, WorkspaceEdit};
use kfix_types::{Diagnostic, FunctionDescriptor, Modality, Visibility};

use super::{anchored_function, ADD_MODIFIER, MAKE_OVERRIDDEN_OPEN, REMOVE_MODIFIER};
use crate::{FixContext, FunctionDeclaration, QuickFix};

/// Conventional Kotlin modifier order. Keywords on the same row share a rank.
const MODIFIER_ORDER: &[&[&str]] = &[
    &["public", "protected", "private", "internal"],
    &["expect", "actual"],
    &["final", "open", "abstract", "sealed", "const"],
    &["external"],
    &["override"],
    &["lateinit"],
    &["tailrec"],
    &["vararg"],
    &["suspend"],
    &["inner"],
    &["enum", "annotation", "fun"],
    &["companion"],
    &["inline", "value"],
    &["infix"],
    &["operator"],
    &["data"],
];

fn modifier_rank(keyword: &str) -> Option<usize> {
    MODIFIER_ORDER
        .iter()
        .position(|row| row.contains(&keyword))
}

/// Where `keyword` goes among the declaration's existing modifiers.
fn insertion_offset(declaration: &FunctionDeclaration, keyword: &str) -> usize {
    let Some(rank) = modifier_rank(keyword) else {
        return declaration.fun_keyword.start;
    };
    declaration
        .modifiers
        .iter()
        .find(|m| modifier_rank(&m.keyword).is_some_and(|r| r > rank))
        .map(|m| m.span.start)
        .unwrap_or(declaration.fun_keyword.start)
}

pub fn add_modifier(ctx: &FixContext<'_>, diagnostic: &Diagnostic, keyword: &str) -> Vec<QuickFix> {
    let Some(declaration) = anchored_function(ctx, diagnostic) else {
        return Vec::new();
    };
    if declaration.modifier(keyword).is_some() {
        return Vec::new();
    }

    let offset = insertion_offset(&declaration, keyword);
    vec![QuickFix {
        title: format!("Add '{keyword}' modifier"),
        family: ADD_MODIFIER,
        file: ctx.file,
        edit: WorkspaceEdit::single_file(
            ctx.file,
            vec![TextEdit::insert(offset, format!("{keyword} "))],
        ),
        is_preferred: true,
    }]
}

pub fn remove_modifier(
    ctx: &FixContext<'_>,
    diagnostic: &Diagnostic,
    keyword: &str,
) -> Vec<QuickFix> {
    let Some(declaration) = anchored_function(ctx, diagnostic) else {
        return Vec::new();
    };
    let Some(modifier) = declaration.modifier(keyword) else {
        return Vec::new();
    };

    // Take the whitespace separating the keyword from the next token with it.
    let trailing_ws = ctx
        .text
        .get(modifier.span.end..)
        .map(|rest| rest.len() - rest.trim_start().len())
        .unwrap_or(0);
    let span = Span::new(modifier.span.start, modifier.span.end + trailing_ws);

    vec![QuickFix {
        title: format!("Remove '{keyword}' modifier"),
        family: REMOVE_MODIFIER,
        file: ctx.file,
        edit: WorkspaceEdit::single_file(ctx.file, vec![TextEdit::delete(span)]),
        is_preferred: false,
    }]
}

/// For `override` of a final member: offer to make each final supertype
/// function with the same name and parameter types `open`. Only members
/// declared in source can be edited.
pub fn make_overridden_member_open(
    ctx: &FixContext<'_>,
    diagnostic: &Diagnostic,
) -> Vec<QuickFix> {
    let Some(declaration) = anchored_function(ctx, diagnostic) else {
        return Vec::new();
    };
    let function = &declaration.descriptor;
    let hierarchy = ctx.declarations.hierarchy();

    let mut out = Vec::new();
    for class in hierarchy
        .all_supertypes(function.owner)
        .into_iter()
        .filter_map(|id| hierarchy.class(id))
    {
        for overridden in class
            .functions
            .iter()
            .filter(|candidate| is_final_counterpart(ctx, function, candidate))
        {
            let Some((file, target)) = ctx.declarations.declaration_of(overridden) else {
                tracing::debug!(
                    class = %class.fq_name,
                    function = %overridden.name,
                    "final member has no source declaration"
                );
                continue;
            };

            let edit = match target.modifier("final") {
                Some(modifier) => TextEdit::replace(modifier.span, "open"),
                None => TextEdit::insert(insertion_offset(&target, "open"), "open "),
            };
            let class_name = class.fq_name.rsplit('.').next().unwrap_or(&class.fq_name);
            out.push(QuickFix {
                title: format!("Make '{class_name}.{}' open", overridden.name),
                family: MAKE_OVERRIDDEN_OPEN,
                file,
                edit: WorkspaceEdit::single_file(file, vec![edit]),
                is_preferred: false,
            });
        }
    }

    if let [only] = out.as_mut_slice() {
        only.is_preferred = true;
    }
    out
}

fn is_final_counterpart(
    ctx: &FixContext<'_>,
    function: &FunctionDescriptor,
    candidate: &FunctionDescriptor,
) -> bool {
    candidate.name == function.name
        && candidate.modality == Modality::Final
        && candidate.visibility != Visibility::Private
        && candidate.is_real()
        && candidate.value_parameters.len() == function.value_parameters.len()
        && candidate
            .value_parameters
            .iter()
            .zip(&function.value_parameters)
            .all(|(a, b)| ctx.types.types_equal(&a.ty, &b.ty))
}
