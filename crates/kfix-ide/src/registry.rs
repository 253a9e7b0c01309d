use std::collections::{BTreeMap, HashSet};

use kfix_core::Span;
use kfix_types::{Diagnostic, DiagnosticKind};

use crate::{fixes, FixContext, QuickFix};

/// Builds the fixes for one diagnostic. Returns nothing when the fix does not
/// apply.
pub type FixFactory = Box<dyn Fn(&FixContext<'_>, &Diagnostic) -> Vec<QuickFix> + Send + Sync>;

struct Registration {
    family: &'static str,
    factory: FixFactory,
}

/// Maps diagnostic kinds to the fix factories that handle them.
#[derive(Default)]
pub struct QuickFixRegistry {
    by_kind: BTreeMap<DiagnosticKind, Vec<Registration>>,
}

impl QuickFixRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in fix.
    pub fn with_default_fixes() -> Self {
        let mut registry = Self::new();
        registry.register(
            DiagnosticKind::NothingToOverride,
            fixes::CHANGE_FUNCTION_SIGNATURE,
            Box::new(fixes::change_function_signature),
        );
        registry.register(
            DiagnosticKind::NothingToOverride,
            fixes::REMOVE_MODIFIER,
            Box::new(|ctx: &FixContext<'_>, diagnostic: &Diagnostic| {
                fixes::remove_modifier(ctx, diagnostic, "override")
            }),
        );
        registry.register(
            DiagnosticKind::VirtualMemberHidden,
            fixes::ADD_MODIFIER,
            Box::new(|ctx: &FixContext<'_>, diagnostic: &Diagnostic| {
                fixes::add_modifier(ctx, diagnostic, "override")
            }),
        );
        registry.register(
            DiagnosticKind::OverridingFinalMember,
            fixes::MAKE_OVERRIDDEN_OPEN,
            Box::new(fixes::make_overridden_member_open),
        );
        registry
    }

    /// Add `factory` for `kind`. Factories run in registration order.
    pub fn register(&mut self, kind: DiagnosticKind, family: &'static str, factory: FixFactory) {
        self.by_kind
            .entry(kind)
            .or_default()
            .push(Registration { family, factory });
    }

    pub fn families_for(&self, kind: DiagnosticKind) -> Vec<&'static str> {
        self.by_kind
            .get(&kind)
            .map(|regs| regs.iter().map(|reg| reg.family).collect())
            .unwrap_or_default()
    }

    /// Fixes for every diagnostic whose span intersects `selection`.
    ///
    /// Diagnostics without a span and disabled fix families are skipped. Fixes
    /// with a title already produced are dropped.
    pub fn quick_fixes(
        &self,
        ctx: &FixContext<'_>,
        diagnostics: &[Diagnostic],
        selection: Span,
    ) -> Vec<QuickFix> {
        let mut out = Vec::new();
        if !ctx.config.enabled {
            return out;
        }

        let mut seen_titles: HashSet<String> = HashSet::new();
        for diagnostic in diagnostics {
            let Some(span) = diagnostic.span else {
                continue;
            };
            if !span.intersects(selection) {
                continue;
            }
            let Some(registrations) = self.by_kind.get(&diagnostic.kind) else {
                tracing::trace!(kind = %diagnostic.kind, "no quick fixes registered");
                continue;
            };

            for registration in registrations {
                if !ctx.config.is_family_enabled(registration.family) {
                    continue;
                }
                for fix in (registration.factory)(ctx, diagnostic) {
                    if seen_titles.insert(fix.title.clone()) {
                        out.push(fix);
                    }
                }
            }
        }

        tracing::debug!(
            diagnostics = diagnostics.len(),
            fixes = out.len(),
            "computed quick fixes"
        );
        out
    }
}
