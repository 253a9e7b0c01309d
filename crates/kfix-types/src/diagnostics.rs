use std::fmt;

use kfix_core::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Identifies the compiler diagnostic factory a diagnostic came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticKind {
    /// `override` on a function that overrides nothing.
    NothingToOverride,
    /// A function hides a supertype member without `override`.
    VirtualMemberHidden,
    /// `override` of a member that is `final` in the supertype.
    OverridingFinalMember,
    Other(&'static str),
}

impl DiagnosticKind {
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::NothingToOverride => "NOTHING_TO_OVERRIDE",
            DiagnosticKind::VirtualMemberHidden => "VIRTUAL_MEMBER_HIDDEN",
            DiagnosticKind::OverridingFinalMember => "OVERRIDING_FINAL_MEMBER",
            DiagnosticKind::Other(code) => code,
        }
    }

    /// Map a diagnostic code back to its kind. Unknown codes become `Other`.
    pub fn from_code(code: &'static str) -> Self {
        match code {
            "NOTHING_TO_OVERRIDE" => DiagnosticKind::NothingToOverride,
            "VIRTUAL_MEMBER_HIDDEN" => DiagnosticKind::VirtualMemberHidden,
            "OVERRIDING_FINAL_MEMBER" => DiagnosticKind::OverridingFinalMember,
            other => DiagnosticKind::Other(other),
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            message: message.into(),
            span,
        }
    }

    pub fn warning(kind: DiagnosticKind, message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            message: message.into(),
            span,
        }
    }
}
