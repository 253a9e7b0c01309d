use kfix_core::{Span, WorkspaceEdit};
use kfix_ide::fixes::{ADD_MODIFIER, CHANGE_FUNCTION_SIGNATURE, MAKE_OVERRIDDEN_OPEN, REMOVE_MODIFIER};
use kfix_ide::{FixContext, QuickFix, QuickFixRegistry};
use kfix_types::{Diagnostic, DiagnosticKind, FunctionDescriptor};
use pretty_assertions::assert_eq;

use super::support::{class_pair, int, params, string, Workspace, FILE};

fn workspace_with_candidate() -> Workspace {
    let (mut classes, a, b) = class_pair("test.A", "test.B");
    classes.add_function(FunctionDescriptor::new(a, "f", params(&[("s", string())])));
    let mut ws = Workspace::new(
        "class B : A() {\n    /*caret*/override fun f(x: Int) {}\n}\n",
        classes,
    );
    ws.declare_at_caret(FunctionDescriptor::new(b, "f", params(&[("x", int())])));
    ws
}

#[test]
fn default_registry_maps_kinds_to_families() {
    let registry = QuickFixRegistry::with_default_fixes();
    assert_eq!(
        registry.families_for(DiagnosticKind::NothingToOverride),
        vec![CHANGE_FUNCTION_SIGNATURE, REMOVE_MODIFIER]
    );
    assert_eq!(
        registry.families_for(DiagnosticKind::VirtualMemberHidden),
        vec![ADD_MODIFIER]
    );
    assert_eq!(
        registry.families_for(DiagnosticKind::OverridingFinalMember),
        vec![MAKE_OVERRIDDEN_OPEN]
    );
    assert!(registry
        .families_for(DiagnosticKind::Other("UNUSED_VARIABLE"))
        .is_empty());
}

#[test]
fn fixes_follow_registration_order() {
    let ws = workspace_with_candidate();
    let titles: Vec<String> = ws
        .fixes(DiagnosticKind::NothingToOverride)
        .into_iter()
        .map(|fix| fix.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Change function signature to 'fun f(s: String): Unit'".to_string(),
            "Remove 'override' modifier".to_string(),
        ]
    );
}

#[test]
fn disabled_families_and_master_switch_are_honored() {
    let mut ws = workspace_with_candidate();
    ws.config.disabled.insert(REMOVE_MODIFIER.to_string());
    let fixes = ws.fixes(DiagnosticKind::NothingToOverride);
    assert_eq!(fixes.len(), 1);
    assert_eq!(fixes[0].family, CHANGE_FUNCTION_SIGNATURE);

    ws.config.enabled = false;
    assert!(ws.fixes(DiagnosticKind::NothingToOverride).is_empty());
}

#[test]
fn diagnostics_outside_the_selection_or_without_span_are_ignored() {
    let ws = workspace_with_candidate();
    let registry = QuickFixRegistry::with_default_fixes();
    let ctx = ws.context();

    let far_away = Span::new(ws.text.len(), ws.text.len());
    let diagnostic = ws.diagnostic(DiagnosticKind::NothingToOverride, 8);
    assert!(registry.quick_fixes(&ctx, &[diagnostic], far_away).is_empty());

    let spanless = Diagnostic::error(DiagnosticKind::NothingToOverride, "x", None);
    assert!(registry
        .quick_fixes(&ctx, &[spanless], Span::new(ws.caret, ws.caret))
        .is_empty());
}

#[test]
fn unregistered_kinds_produce_nothing() {
    let ws = workspace_with_candidate();
    assert!(ws.fixes(DiagnosticKind::Other("UNUSED_VARIABLE")).is_empty());
}

#[test]
fn custom_factories_can_be_registered_and_titles_are_deduplicated() {
    let ws = workspace_with_candidate();
    let mut registry = QuickFixRegistry::new();
    for _ in 0..2 {
        registry.register(
            DiagnosticKind::Other("EXPOSED_PARAMETER_TYPE"),
            "widen-visibility",
            Box::new(|ctx: &FixContext<'_>, _: &Diagnostic| {
                vec![QuickFix {
                    title: "Make 'f' public".to_string(),
                    family: "widen-visibility",
                    file: ctx.file,
                    edit: WorkspaceEdit::default(),
                    is_preferred: false,
                }]
            }),
        );
    }

    let diagnostic = ws.diagnostic(DiagnosticKind::Other("EXPOSED_PARAMETER_TYPE"), 8);
    let fixes = registry.quick_fixes(&ws.context(), &[diagnostic], Span::new(ws.caret, ws.caret));
    assert_eq!(fixes.len(), 1);
    assert_eq!(fixes[0].file, FILE);
}
