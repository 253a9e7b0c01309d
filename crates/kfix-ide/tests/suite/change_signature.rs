use kfix_ide::fixes::CHANGE_FUNCTION_SIGNATURE;
use kfix_test_utils::apply_fix;
use kfix_types::{ClassStore, DiagnosticKind, FunctionDescriptor, Modality, Type};
use pretty_assertions::assert_eq;

use super::support::{class_pair, int, params, string, Workspace};

fn signature_fixes(ws: &Workspace) -> Vec<kfix_ide::QuickFix> {
    ws.fixes(DiagnosticKind::NothingToOverride)
        .into_iter()
        .filter(|fix| fix.family == CHANGE_FUNCTION_SIGNATURE)
        .collect()
}

#[test]
fn reuses_subclass_parameter_matched_by_type() {
    let (mut classes, a, b) = class_pair("test.A", "test.B");
    classes.add_function(FunctionDescriptor::new(a, "f", params(&[("s", string())])));

    let mut ws = Workspace::new(
        r#"open class A {
    open fun f(s: String) {}
}

class B : A() {
    /*caret*/override fun f(x: Int, y: String) {}
}
"#,
        classes,
    );
    ws.declare_at_caret(FunctionDescriptor::new(
        b,
        "f",
        params(&[("x", int()), ("y", string())]),
    ));

    let fixes = signature_fixes(&ws);
    assert_eq!(fixes.len(), 1);
    assert_eq!(fixes[0].title, "Change function signature to 'fun f(y: String): Unit'");
    assert!(fixes[0].is_preferred);
    assert_eq!(
        apply_fix(&ws.text, &fixes[0]),
        r#"open class A {
    open fun f(s: String) {}
}

class B : A() {
    override fun f(y: String) {}
}
"#
    );
}

#[test]
fn adopts_supertype_parameters_and_return_type() {
    let (mut classes, a, b) = class_pair("test.Shape", "test.Circle");
    classes.add_function(
        FunctionDescriptor::new(a, "area", params(&[("scale", Type::simple("kotlin.Double"))]))
            .with_modality(Modality::Abstract)
            .with_return_type(Type::simple("kotlin.Double")),
    );

    let mut ws = Workspace::new(
        "class Circle : Shape() {\n    /*caret*/override fun area() {}\n}\n",
        classes,
    );
    ws.declare_at_caret(FunctionDescriptor::new(b, "area", Vec::new()));

    let fixes = signature_fixes(&ws);
    assert_eq!(fixes.len(), 1);
    assert_eq!(
        fixes[0].title,
        "Change function signature to 'fun area(scale: Double): Double'"
    );
    assert_eq!(
        apply_fix(&ws.text, &fixes[0]),
        "class Circle : Shape() {\n    override fun area(scale: Double): Double {}\n}\n"
    );
}

#[test]
fn explicit_return_type_is_replaced_or_removed() {
    let (mut classes, a, b) = class_pair("test.A", "test.B");
    classes.add_function(
        FunctionDescriptor::new(a, "g", params(&[("n", int())])).with_return_type(string()),
    );
    classes.add_function(FunctionDescriptor::new(a, "g", params(&[("n", int()), ("m", int())])));

    let mut ws = Workspace::new(
        "class B : A() {\n    /*caret*/override fun g(n: Int): Long = 0L\n}\n",
        classes,
    );
    ws.declare_at_caret(
        FunctionDescriptor::new(b, "g", params(&[("n", int())]))
            .with_return_type(Type::simple("kotlin.Long")),
    );

    let fixes = signature_fixes(&ws);
    let titles: Vec<&str> = fixes.iter().map(|fix| fix.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Change function signature to 'fun g(n: Int): String'",
            "Change function signature to 'fun g(n: Int, m: Int): Unit'",
        ]
    );
    assert!(fixes.iter().all(|fix| !fix.is_preferred));

    assert_eq!(
        apply_fix(&ws.text, &fixes[0]),
        "class B : A() {\n    override fun g(n: Int): String = 0L\n}\n"
    );
    assert_eq!(
        apply_fix(&ws.text, &fixes[1]),
        "class B : A() {\n    override fun g(n: Int, m: Int) = 0L\n}\n"
    );
}

#[test]
fn candidate_count_is_capped_by_config() {
    let (mut classes, a, b) = class_pair("test.A", "test.B");
    for arity in 1..=4 {
        let list: Vec<(String, kfix_types::Type)> =
            (0..arity).map(|i| (format!("p{i}"), int())).collect();
        let list: Vec<(&str, kfix_types::Type)> =
            list.iter().map(|(n, t)| (n.as_str(), t.clone())).collect();
        classes.add_function(FunctionDescriptor::new(a, "h", params(&list)));
    }

    let mut ws = Workspace::new("class B : A() {\n    /*caret*/override fun h() {}\n}\n", classes);
    ws.declare_at_caret(FunctionDescriptor::new(b, "h", Vec::new()));
    assert_eq!(signature_fixes(&ws).len(), 4);

    ws.config.max_signature_candidates = 2;
    let fixes = signature_fixes(&ws);
    assert_eq!(fixes.len(), 2);
    assert_eq!(fixes[0].title, "Change function signature to 'fun h(p0: Int): Unit'");
}

#[test]
fn no_fix_without_a_same_named_super_function() {
    let (mut classes, a, b) = class_pair("test.A", "test.B");
    classes.add_function(FunctionDescriptor::new(a, "other", params(&[("s", string())])));
    classes.add_function(
        FunctionDescriptor::new(a, "f", params(&[("s", string())])).with_modality(Modality::Final),
    );

    let mut ws = Workspace::new("class B : A() {\n    /*caret*/override fun f() {}\n}\n", classes);
    ws.declare_at_caret(FunctionDescriptor::new(b, "f", Vec::new()));

    assert!(signature_fixes(&ws).is_empty());
}

#[test]
fn no_fix_when_the_anchor_is_not_a_function() {
    let (classes, _, _) = class_pair("test.A", "test.B");
    let ws = Workspace::new("/*caret*/class B : A()\n", classes);

    assert!(ws.fixes(DiagnosticKind::NothingToOverride).is_empty());
}

#[test]
fn types_outside_default_imports_are_written_qualified() {
    let (mut classes, a, b) = class_pair("test.A", "test.B");
    classes.add_function(
        FunctionDescriptor::new(a, "at", params(&[("when", Type::simple("java.time.Instant"))]))
            .with_return_type(Type::simple("java.time.Duration")),
    );

    let mut ws = Workspace::new("class B : A() {\n    /*caret*/override fun at() {}\n}\n", classes);
    ws.declare_at_caret(FunctionDescriptor::new(b, "at", Vec::new()));

    let fixes = signature_fixes(&ws);
    assert_eq!(fixes.len(), 1);
    assert_eq!(
        fixes[0].title,
        "Change function signature to 'fun at(`when`: Instant): Duration'"
    );
    assert_eq!(
        apply_fix(&ws.text, &fixes[0]),
        "class B : A() {\n    override fun at(`when`: java.time.Instant): java.time.Duration {}\n}\n"
    );
}

#[test]
fn candidates_with_the_same_short_rendering_get_qualified_titles() {
    let mut classes = ClassStore::new();
    let any = classes.add_class("kotlin.Any", vec![]);
    let a = classes.add_class("test.A", vec![any]);
    let i = classes.add_class("test.I", vec![any]);
    let b = classes.add_class("test.B", vec![a, i]);
    classes.add_function(FunctionDescriptor::new(a, "f", params(&[("d", Type::simple("java.util.Date"))])));
    classes.add_function(
        FunctionDescriptor::new(i, "f", params(&[("d", Type::simple("java.sql.Date"))]))
            .with_modality(Modality::Abstract),
    );

    let mut ws = Workspace::new("class B : A(), I {\n    /*caret*/override fun f() {}\n}\n", classes);
    ws.declare_at_caret(FunctionDescriptor::new(b, "f", Vec::new()));

    let fixes = signature_fixes(&ws);
    let titles: Vec<&str> = fixes.iter().map(|fix| fix.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Change function signature to 'fun f(d: java.util.Date): kotlin.Unit'",
            "Change function signature to 'fun f(d: java.sql.Date): kotlin.Unit'",
        ]
    );
    assert_eq!(
        apply_fix(&ws.text, &fixes[1]),
        "class B : A(), I {\n    override fun f(d: java.sql.Date) {}\n}\n"
    );
}
