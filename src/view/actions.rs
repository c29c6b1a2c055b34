//! Registration action forwarding.
//!
//! Mutation (registering a child into a session, joining a waitlist) is
//! delegated entirely to the caller: this layer presents the action and
//! forwards the call, nothing more.

use crate::api::SessionId;
use crate::models::view_rows::SessionViewRow;
use crate::services::availability::{self, AvailabilityInput, AvailabilitySnapshot, SessionAction};

/// Caller-supplied hooks for registration actions.
pub trait RegistrationHooks {
    /// User chose to register for a session with available spots.
    fn on_select(&self, session_id: &SessionId);

    /// User chose to join the waitlist for a full session.
    fn on_join_waitlist(&self, session_id: &SessionId, program_name: &str);

    /// Confirmation action from within a detail view; semantically
    /// equivalent to select, triggered from a deeper context.
    fn on_sign_up(&self, session_id: &SessionId, program_name: &str);
}

/// Route a card tap to the right hook: waitlist when the session is full,
/// select otherwise. The two affordances are mutually exclusive. Returns
/// the action that was dispatched.
pub fn dispatch_card_action(hooks: &dyn RegistrationHooks, row: &SessionViewRow) -> SessionAction {
    let snapshot = AvailabilitySnapshot::derive(&AvailabilityInput::from_row(row));
    match availability::action(&snapshot) {
        SessionAction::JoinWaitlist => {
            hooks.on_join_waitlist(&row.id, &row.program_name);
            SessionAction::JoinWaitlist
        }
        SessionAction::Select => {
            hooks.on_select(&row.id);
            SessionAction::Select
        }
    }
}

/// Forward a sign-up confirmation from a detail view.
pub fn confirm_sign_up(hooks: &dyn RegistrationHooks, row: &SessionViewRow) {
    hooks.on_sign_up(&row.id, &row.program_name);
}
