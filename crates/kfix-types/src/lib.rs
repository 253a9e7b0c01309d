//! Semantic model consumed by kfix quick fixes.
//!
//! These types stand in for the compiler frontend's descriptors: they carry
//! just enough information (names, parameter types, modality, supertypes) for
//! fixes to decide what to offer. Type checking itself lives elsewhere; fixes
//! only ever ask whether two types are equal, through [`TypeEquality`].

mod descriptors;
mod diagnostics;
mod hierarchy;
mod ty;

pub use descriptors::{
    CallableKind, ClassDescriptor, ClassId, FunctionDescriptor, Modality, ValueParameter,
    Visibility,
};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use hierarchy::{ClassHierarchy, ClassStore};
pub use kfix_core::{Name, Span};
pub use ty::{StructuralTypeEquality, Type, TypeArg, TypeEquality};
