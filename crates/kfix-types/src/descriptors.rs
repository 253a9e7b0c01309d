use kfix_core::Name;
use serde::{Deserialize, Serialize};

use crate::Type;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassId(pub u32);

/// A formal value parameter of a function.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueParameter {
    pub name: Name,
    pub ty: Type,
}

impl ValueParameter {
    pub fn new(name: impl Into<Name>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Final,
    Open,
    Abstract,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Protected,
    Internal,
    Private,
}

/// How a callable came to exist in its owner's member scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallableKind {
    /// Written in source (or loaded from a library as such).
    Declaration,
    /// Inherited member copied into a subclass scope; not a real declaration.
    FakeOverride,
    /// Generated for interface delegation (`class A(b: B) : B by b`).
    Delegation,
    /// Generated by the compiler (data class `copy`, `componentN`, ...).
    Synthesized,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: Name,
    pub value_parameters: Vec<ValueParameter>,
    pub return_type: Type,
    pub modality: Modality,
    pub visibility: Visibility,
    pub kind: CallableKind,
    pub owner: ClassId,
}

impl FunctionDescriptor {
    /// A public, open, source-declared function returning `Unit`.
    pub fn new(owner: ClassId, name: impl Into<Name>, value_parameters: Vec<ValueParameter>) -> Self {
        Self {
            name: name.into(),
            value_parameters,
            return_type: Type::unit(),
            modality: Modality::Open,
            visibility: Visibility::Public,
            kind: CallableKind::Declaration,
            owner,
        }
    }

    #[must_use]
    pub fn with_return_type(mut self, ty: Type) -> Self {
        self.return_type = ty;
        self
    }

    #[must_use]
    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: CallableKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_overridable(&self) -> bool {
        self.modality != Modality::Final && self.visibility != Visibility::Private
    }

    /// Whether the function exists in source rather than being a fake override
    /// or a compiler-generated member.
    pub fn is_real(&self) -> bool {
        matches!(self.kind, CallableKind::Declaration | CallableKind::Delegation)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub id: ClassId,
    pub fq_name: String,
    /// Direct supertypes in declaration order.
    pub supertypes: Vec<ClassId>,
    pub functions: Vec<FunctionDescriptor>,
}
