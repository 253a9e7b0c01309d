use std::fmt;

use kfix_core::Name;
use serde::{Deserialize, Serialize};

/// A semantic type as reported by the type checker.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// A (possibly generic) class type, e.g. `kotlin.collections.List<kotlin.String>?`.
    Class {
        fq_name: String,
        args: Vec<TypeArg>,
        nullable: bool,
    },
    /// A reference to a type parameter in scope.
    Param { name: Name, nullable: bool },
    /// A type the checker could not resolve.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeArg {
    Invariant(Type),
    In(Type),
    Out(Type),
    Star,
}

impl Type {
    /// A non-null class type without type arguments.
    pub fn simple(fq_name: impl Into<String>) -> Self {
        Type::Class {
            fq_name: fq_name.into(),
            args: Vec::new(),
            nullable: false,
        }
    }

    pub fn generic(fq_name: impl Into<String>, args: Vec<TypeArg>) -> Self {
        Type::Class {
            fq_name: fq_name.into(),
            args,
            nullable: false,
        }
    }

    pub fn param(name: impl Into<Name>) -> Self {
        Type::Param {
            name: name.into(),
            nullable: false,
        }
    }

    pub fn unit() -> Self {
        Type::simple("kotlin.Unit")
    }

    /// The same type marked nullable. Error types are returned unchanged.
    #[must_use]
    pub fn nullable(self) -> Self {
        match self {
            Type::Class { fq_name, args, .. } => Type::Class {
                fq_name,
                args,
                nullable: true,
            },
            Type::Param { name, .. } => Type::Param {
                name,
                nullable: true,
            },
            Type::Error => Type::Error,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Type::Class { fq_name, args, nullable: false } if fq_name == "kotlin.Unit" && args.is_empty())
    }

    pub fn is_error(&self) -> bool {
        match self {
            Type::Error => true,
            Type::Class { args, .. } => args.iter().any(|arg| match arg {
                TypeArg::Invariant(ty) | TypeArg::In(ty) | TypeArg::Out(ty) => ty.is_error(),
                TypeArg::Star => false,
            }),
            Type::Param { .. } => false,
        }
    }
}

fn short_name(fq_name: &str) -> &str {
    fq_name.rsplit('.').next().unwrap_or(fq_name)
}

/// Renders with short class names, the way types appear in fix titles and in
/// generated source.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Class {
                fq_name,
                args,
                nullable,
            } => {
                f.write_str(short_name(fq_name))?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (idx, arg) in args.iter().enumerate() {
                        if idx > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
            Type::Param { name, nullable } => {
                write!(f, "{name}")?;
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
            Type::Error => f.write_str("[ERROR]"),
        }
    }
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArg::Invariant(ty) => write!(f, "{ty}"),
            TypeArg::In(ty) => write!(f, "in {ty}"),
            TypeArg::Out(ty) => write!(f, "out {ty}"),
            TypeArg::Star => f.write_str("*"),
        }
    }
}

/// Semantic type equality, supplied by the type system.
pub trait TypeEquality {
    fn types_equal(&self, a: &Type, b: &Type) -> bool;
}

impl<F> TypeEquality for F
where
    F: Fn(&Type, &Type) -> bool,
{
    fn types_equal(&self, a: &Type, b: &Type) -> bool {
        self(a, b)
    }
}

/// Equality by structure: same class, same nullability, same arguments with the
/// same projections. Unresolved types never compare equal, not even to
/// themselves, so they cannot pair up unrelated parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuralTypeEquality;

impl TypeEquality for StructuralTypeEquality {
    fn types_equal(&self, a: &Type, b: &Type) -> bool {
        if a.is_error() || b.is_error() {
            return false;
        }
        a == b
    }
}
