use std::collections::HashSet;

use kfix_types::{ClassHierarchy, FunctionDescriptor, Type, TypeEquality, ValueParameter};

use crate::{reconcile_parameters, render_parameter_list, render_signature, render_type, TypeNames};

/// Supertype functions `function` could be changed to override.
///
/// Walks every transitive supertype of the owner and keeps same-named
/// functions that are overridable and really declared (fake overrides and
/// compiler-generated members are skipped). Ordered by supertype, then by
/// declaration order within a class.
pub fn possible_super_functions<'h>(
    hierarchy: &'h dyn ClassHierarchy,
    function: &FunctionDescriptor,
) -> Vec<&'h FunctionDescriptor> {
    hierarchy
        .all_supertypes(function.owner)
        .into_iter()
        .filter_map(|id| hierarchy.class(id))
        .flat_map(|class| class.functions.iter())
        .filter(|candidate| candidate.name == function.name)
        .filter(|candidate| candidate.is_overridable() && candidate.is_real())
        .collect()
}

/// The signature `function` would get if changed to override `super_function`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureChange {
    pub super_function: FunctionDescriptor,
    pub parameters: Vec<ValueParameter>,
    pub return_type: Type,
}

impl SignatureChange {
    /// Short-name rendering, for titles.
    pub fn render(&self) -> String {
        self.render_with(TypeNames::Short)
    }

    /// Fully qualified rendering, for telling apart changes whose short
    /// renderings collide.
    pub fn render_qualified(&self) -> String {
        self.render_with(TypeNames::Qualified)
    }

    fn render_with(&self, names: TypeNames) -> String {
        render_signature(
            &self.super_function.name,
            &self.parameters,
            &self.return_type,
            names,
        )
    }

    /// The parameter list as it should be written into the file.
    pub fn source_parameter_list(&self) -> String {
        render_parameter_list(&self.parameters, TypeNames::Source)
    }

    /// The return type as it should be written into the file.
    pub fn source_return_type(&self) -> String {
        render_type(&self.return_type, TypeNames::Source)
    }

    /// Whether applying this change would leave `function` as it is.
    pub fn is_noop_for(&self, function: &FunctionDescriptor) -> bool {
        self.parameters == function.value_parameters && self.return_type == function.return_type
    }
}

/// One [`SignatureChange`] per candidate from [`possible_super_functions`].
///
/// Changes that would not modify `function` are dropped, as are changes with
/// the same parameters and return type as an earlier one (e.g. the same member
/// declared by two interfaces).
pub fn signature_changes(
    hierarchy: &dyn ClassHierarchy,
    types: &dyn TypeEquality,
    function: &FunctionDescriptor,
) -> Vec<SignatureChange> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for candidate in possible_super_functions(hierarchy, function) {
        let change = SignatureChange {
            parameters: reconcile_parameters(
                &function.value_parameters,
                &candidate.value_parameters,
                types,
            ),
            return_type: candidate.return_type.clone(),
            super_function: candidate.clone(),
        };
        if change.is_noop_for(function) {
            tracing::trace!(signature = %change.render(), "skipping no-op signature change");
            continue;
        }
        if !seen.insert((change.parameters.clone(), change.return_type.clone())) {
            tracing::trace!(signature = %change.render_qualified(), "skipping duplicate signature change");
            continue;
        }
        out.push(change);
    }

    tracing::debug!(
        function = %function.name,
        candidates = out.len(),
        "collected signature changes"
    );
    out
}
