//! Route-guard decision over the identity store's resolved state.
//!
//! # Responsibility
//! - Translate [`SessionState`] into the action a guarded view must take.
//!
//! # Invariants
//! - `Unresolved` never redirects; rendering is suspended instead.
//! - Redirects carry no return-path state; post-login landing is always
//!   the default entry point.

use crate::store::identity_store::SessionState;

/// What a guarded view must do for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render a neutral waiting placeholder; resolution is pending.
    Wait,
    /// Redirect to the sign-in entry point.
    RedirectToSignIn,
    /// Render the guarded content unchanged.
    Allow,
}

/// Maps the session state to a guard decision.
pub fn guard_route(state: SessionState) -> GuardDecision {
    match state {
        SessionState::Unresolved => GuardDecision::Wait,
        SessionState::Anonymous => GuardDecision::RedirectToSignIn,
        SessionState::Authenticated => GuardDecision::Allow,
    }
}
