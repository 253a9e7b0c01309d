use kfix_types::{TypeEquality, ValueParameter};

/// Bookkeeping for one reconciliation.
///
/// `matched[i]` is set once supertype position `i` has been assigned a
/// subclass parameter; `used[j]` once subclass parameter `j` has been consumed.
/// Neither flag is ever cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    pub matched: Vec<bool>,
    pub used: Vec<bool>,
}

impl MatchState {
    pub fn new(super_arity: usize, sub_arity: usize) -> Self {
        Self {
            matched: vec![false; super_arity],
            used: vec![false; sub_arity],
        }
    }

    /// Assign the first unused subclass parameter accepted by `accepts` to every
    /// still-unmatched supertype position, in position order.
    fn assign<'a>(
        &mut self,
        slots: &mut [Option<&'a ValueParameter>],
        sub: &'a [ValueParameter],
        sup: &[ValueParameter],
        accepts: impl Fn(&ValueParameter, &ValueParameter) -> bool,
    ) -> usize {
        let mut assigned = 0;
        for (i, super_param) in sup.iter().enumerate() {
            if self.matched[i] {
                continue;
            }
            let candidate = sub
                .iter()
                .enumerate()
                .find(|(j, param)| !self.used[*j] && accepts(*param, super_param));
            if let Some((j, param)) = candidate {
                self.used[j] = true;
                self.matched[i] = true;
                slots[i] = Some(param);
                assigned += 1;
            }
        }
        assigned
    }
}

/// Reshape `sub` (the overriding function's parameters) to the arity of `sup`
/// (a supertype function's parameters).
///
/// Position `i` of the result is the first unused subclass parameter with the
/// same name as `sup[i]`; failing that, the first unused one whose type equals
/// `sup[i]`'s; failing that, `sup[i]` itself. Name matches are resolved for all
/// positions before any type match is considered. Subclass parameters are
/// reused with their own name and type, and each at most once.
///
/// Total: any pair of lists is accepted and the result always has `sup.len()`
/// elements.
pub fn reconcile_parameters(
    sub: &[ValueParameter],
    sup: &[ValueParameter],
    types: &dyn TypeEquality,
) -> Vec<ValueParameter> {
    let mut state = MatchState::new(sup.len(), sub.len());
    let mut slots: Vec<Option<&ValueParameter>> = vec![None; sup.len()];

    let by_name = state.assign(&mut slots, sub, sup, |param, super_param| {
        param.name == super_param.name
    });
    let by_type = state.assign(&mut slots, sub, sup, |param, super_param| {
        types.types_equal(&param.ty, &super_param.ty)
    });

    tracing::trace!(
        super_arity = sup.len(),
        sub_arity = sub.len(),
        by_name,
        by_type,
        fallback = sup.len() - by_name - by_type,
        "reconciled parameter lists"
    );

    slots
        .into_iter()
        .zip(sup)
        .map(|(slot, super_param)| slot.unwrap_or(super_param).clone())
        .collect()
}
