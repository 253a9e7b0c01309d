use std::fmt::Write;

use kfix_types::{Name, Type, TypeArg, ValueParameter};

/// How class names are written when rendering types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeNames {
    /// Last segment only: `Date`. For titles.
    Short,
    /// Always fully qualified: `java.util.Date`.
    Qualified,
    /// Short for packages Kotlin imports by default, fully qualified otherwise.
    /// Safe to insert into a file without adding imports.
    Source,
}

/// Packages whose classes resolve without an import.
const DEFAULT_IMPORTS: &[&str] = &[
    "kotlin",
    "kotlin.annotation",
    "kotlin.collections",
    "kotlin.comparisons",
    "kotlin.io",
    "kotlin.jvm",
    "kotlin.ranges",
    "kotlin.sequences",
    "kotlin.text",
    "java.lang",
];

/// Hard keywords: never valid as bare identifiers.
const HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

fn class_name(fq_name: &str, names: TypeNames) -> &str {
    let (package, short) = match fq_name.rsplit_once('.') {
        Some((package, short)) => (package, short),
        None => return fq_name,
    };
    match names {
        TypeNames::Short => short,
        TypeNames::Qualified => fq_name,
        TypeNames::Source if DEFAULT_IMPORTS.contains(&package) => short,
        TypeNames::Source => fq_name,
    }
}

fn write_name(out: &mut String, name: &Name) {
    if HARD_KEYWORDS.contains(&name.as_str()) {
        let _ = write!(out, "`{name}`");
    } else {
        out.push_str(name.as_str());
    }
}

fn write_type(out: &mut String, ty: &Type, names: TypeNames) {
    match ty {
        Type::Class {
            fq_name,
            args,
            nullable,
        } => {
            out.push_str(class_name(fq_name, names));
            if !args.is_empty() {
                out.push('<');
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    match arg {
                        TypeArg::Invariant(ty) => write_type(out, ty, names),
                        TypeArg::In(ty) => {
                            out.push_str("in ");
                            write_type(out, ty, names);
                        }
                        TypeArg::Out(ty) => {
                            out.push_str("out ");
                            write_type(out, ty, names);
                        }
                        TypeArg::Star => out.push('*'),
                    }
                }
                out.push('>');
            }
            if *nullable {
                out.push('?');
            }
        }
        Type::Param { .. } | Type::Error => {
            let _ = write!(out, "{ty}");
        }
    }
}

pub fn render_type(ty: &Type, names: TypeNames) -> String {
    let mut out = String::new();
    write_type(&mut out, ty, names);
    out
}

/// `(a: Int, b: List<String>)`
pub fn render_parameter_list(params: &[ValueParameter], names: TypeNames) -> String {
    let mut out = String::from("(");
    for (idx, param) in params.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        write_name(&mut out, &param.name);
        out.push_str(": ");
        write_type(&mut out, &param.ty, names);
    }
    out.push(')');
    out
}

/// `fun name(a: Int): Unit`
pub fn render_signature(
    name: &Name,
    params: &[ValueParameter],
    return_type: &Type,
    names: TypeNames,
) -> String {
    let mut out = String::from("fun ");
    write_name(&mut out, name);
    out.push_str(&render_parameter_list(params, names));
    out.push_str(": ");
    write_type(&mut out, return_type, names);
    out
}
