//! Reconciling a function's signature with the supertype functions it claims
//! to override.
//!
//! [`reconcile_parameters`] is the matching algorithm proper. The rest of the
//! crate finds the candidates it runs against ([`possible_super_functions`]),
//! packages the result per candidate ([`signature_changes`]) and renders it as
//! Kotlin source.

mod candidates;
mod reconcile;
mod render;

pub use candidates::{possible_super_functions, signature_changes, SignatureChange};
pub use reconcile::{reconcile_parameters, MatchState};
pub use render::{render_parameter_list, render_signature, render_type, TypeNames};
