//! Pure state transitions for the account form.

use super::event::FormEvent;
use super::state::{FormState, dedup_ordered};

/// Apply one event to the form state.
///
/// Accepted edits clear any displayed error. Edits the form would not
/// offer are ignored and return the state unchanged:
/// - email edits on an existing account
/// - network edits while the super user box is checked, or when the host
///   offers no network list
/// - toggling on a network the host did not offer
///
/// A replaced selection keeps only offered networks.
#[must_use]
pub fn reduce(state: FormState, event: FormEvent) -> FormState {
    if !accepts(&state, &event) {
        return state;
    }

    let mut next = state.with_error(None);
    match event {
        FormEvent::EmailChanged(email) => next.email = email,
        FormEvent::PasswordChanged(password) => next.password = password,
        FormEvent::ConfirmPasswordChanged(password) => next.confirm_password = password,
        FormEvent::SuperUserToggled(on) => next.is_super_user = on,
        FormEvent::NetworkSelectionChanged(ids) => {
            let selected = dedup_ordered(ids.into_iter().filter(|id| next.offers_network(id)));
            next.selected_network_ids = selected;
        }
        FormEvent::NetworkToggled(id) => {
            if let Some(pos) = next.selected_network_ids.iter().position(|n| *n == id) {
                next.selected_network_ids.remove(pos);
            } else {
                next.selected_network_ids.push(id);
            }
        }
    }
    next
}

/// Whether `event` is an edit the form currently allows.
///
/// A selected network can always be toggled off, even one carried over
/// from the account that the host no longer offers.
pub(crate) fn accepts(state: &FormState, event: &FormEvent) -> bool {
    match event {
        FormEvent::EmailChanged(_) => state.email_editable(),
        FormEvent::PasswordChanged(_)
        | FormEvent::ConfirmPasswordChanged(_)
        | FormEvent::SuperUserToggled(_) => true,
        FormEvent::NetworkSelectionChanged(_) => state.network_selection_enabled(),
        FormEvent::NetworkToggled(id) => {
            state.network_selection_enabled()
                && (state.offers_network(id) || state.selected_network_ids.contains(id))
        }
    }
}
