//! Queueing of UI events from screens and status text for applied transitions.

use crossbeam_channel::{Sender, TrySendError};
use session_core::{AppState, Transition};

use crate::controller::events::UiEvent;

pub const UI_EVENT_QUEUE_CAPACITY: usize = 256;

/// Returns whether the event was queued; failures are written to `status`.
pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent, status: &mut String) -> bool {
    let event_name = match &event {
        UiEvent::Session(session_event) => session_event.name(),
        UiEvent::ShowSignUp => "show_sign_up",
        UiEvent::Info(_) => "info",
        UiEvent::Error(_) => "error",
    };

    match ui_tx.try_send(event) {
        Ok(()) => {
            tracing::debug!(event = event_name, "queued ui event");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(event = event_name, "ui event queue full");
            *status = "UI event queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(event = event_name, "ui event queue disconnected");
            *status = "UI event queue disconnected; restart the app".to_string();
            false
        }
    }
}

/// Status line for a transition, if it is worth announcing.
pub fn transition_status(transition: Transition, state: &AppState) -> Option<String> {
    match transition {
        Transition::LoggedIn => {
            let session = state.session();
            let role = session.role().map(|role| role.label()).unwrap_or_default();
            Some(format!("Signed in as {} ({role})", session.display_name()))
        }
        Transition::LoggedOut => Some("Signed out".to_string()),
        Transition::Navigated | Transition::Unchanged => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use session_core::SessionEvent;
    use shared::domain::{Role, ViewId};

    #[test]
    fn queued_events_arrive_in_order() {
        let (tx, rx) = bounded(4);
        let mut status = String::new();
        dispatch_ui_event(
            &tx,
            UiEvent::Session(SessionEvent::navigate(ViewId::Profile)),
            &mut status,
        );
        dispatch_ui_event(&tx, UiEvent::Session(SessionEvent::Logout), &mut status);

        let names: Vec<&str> = rx
            .try_iter()
            .map(|event| match event {
                UiEvent::Session(event) => event.name(),
                _ => "other",
            })
            .collect();
        assert_eq!(names, ["navigate", "logout"]);
        assert!(status.is_empty());
    }

    #[test]
    fn full_queue_is_reported_in_status() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_ui_event(&tx, UiEvent::ShowSignUp, &mut status));
        assert!(!dispatch_ui_event(&tx, UiEvent::ShowSignUp, &mut status));
        assert!(status.contains("full"));
    }

    #[test]
    fn disconnected_queue_is_reported_in_status() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        dispatch_ui_event(&tx, UiEvent::Info("hi".to_string()), &mut status);
        assert!(status.contains("disconnected"));
    }

    #[test]
    fn announces_login_and_logout_only() {
        let mut state = AppState::new();
        let transition = state.login(Role::Doctor, "Dr. Sarah Johnson");
        assert_eq!(
            transition_status(transition, &state).as_deref(),
            Some("Signed in as Dr. Sarah Johnson (Doctor / Healthcare Professional)")
        );

        let transition = state.navigate(ViewId::Upload);
        assert_eq!(transition_status(transition, &state), None);

        let transition = state.logout();
        assert_eq!(
            transition_status(transition, &state).as_deref(),
            Some("Signed out")
        );
    }
}
