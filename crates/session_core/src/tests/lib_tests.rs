use super::*;
use shared::domain::{Role, ViewId};

const NAMES: [&str; 4] = ["Dr. Sarah Johnson", "Alex", "", "  spaced  "];

fn labels(items: &[NavigationItem]) -> Vec<&'static str> {
    items.iter().map(|item| item.label).collect()
}

#[test]
fn initial_state_is_logged_out_on_feed() {
    let state = AppState::new();
    assert!(!state.session().is_authenticated());
    assert_eq!(state.session().role(), None);
    assert_eq!(state.session().display_name(), "");
    assert_eq!(state.requested(), ViewId::Feed);
    assert_eq!(state.rendered_view(), Some(ViewId::Auth));
}

#[test]
fn login_sets_identity_and_resets_to_feed() {
    for role in Role::ALL {
        for name in NAMES {
            let mut state = AppState::new();
            state.navigate(ViewId::Profile);

            assert_eq!(state.login(role, name), Transition::LoggedIn);

            assert!(state.session().is_authenticated());
            assert_eq!(state.session().role(), Some(role));
            assert_eq!(state.session().display_name(), name);
            assert_eq!(state.requested(), ViewId::Feed);
            assert_eq!(state.rendered_view(), Some(ViewId::Feed));
        }
    }
}

#[test]
fn relogin_replaces_identity() {
    let mut state = AppState::new();
    state.login(Role::Doctor, "Dr. A");
    state.navigate(ViewId::Upload);
    state.login(Role::Student, "B");
    assert_eq!(state.session(), &Session::authenticated(Role::Student, "B"));
    assert_eq!(state.requested(), ViewId::Feed);
}

#[test]
fn logout_resets_fully() {
    let sequences: Vec<Vec<SessionEvent>> = vec![
        vec![SessionEvent::Logout],
        vec![SessionEvent::login(Role::Doctor, "Dr. A"), SessionEvent::Logout],
        vec![
            SessionEvent::login(Role::Student, "S"),
            SessionEvent::navigate(ViewId::Profile),
            SessionEvent::Logout,
        ],
        vec![
            SessionEvent::navigate(ViewId::Upload),
            SessionEvent::login(Role::Doctor, "Dr. A"),
            SessionEvent::navigate(ViewId::Upload),
            SessionEvent::Logout,
        ],
    ];

    for events in sequences {
        let state = events.into_iter().fold(AppState::new(), apply);
        assert_eq!(state.session(), &Session::anonymous());
        assert_eq!(state.session().display_name(), "");
        assert_eq!(state.rendered_view(), Some(ViewId::Auth));
    }
}

#[test]
fn logout_after_login_requests_auth() {
    let mut state = AppState::new();
    state.login(Role::Doctor, "Dr. A");
    assert_eq!(state.logout(), Transition::LoggedOut);
    assert_eq!(state.requested(), ViewId::Auth);
}

#[test]
fn logout_is_idempotent() {
    let mut once = AppState::new();
    once.login(Role::Student, "S");
    once.logout();

    let mut twice = once.clone();
    assert_eq!(twice.logout(), Transition::Unchanged);
    assert_eq!(twice, once);

    let mut fresh = AppState::new();
    fresh.navigate(ViewId::Profile);
    let before = fresh.clone();
    assert_eq!(fresh.logout(), Transition::Unchanged);
    assert_eq!(fresh, before);
}

#[test]
fn unauthenticated_requests_resolve_to_auth() {
    let anonymous = Session::anonymous();
    for view in ViewId::ALL {
        assert_eq!(resolve_rendered_view(&anonymous, view), Some(ViewId::Auth));
    }
}

#[test]
fn upload_is_gated_to_doctors() {
    let student = Session::authenticated(Role::Student, "S");
    let doctor = Session::authenticated(Role::Doctor, "Dr. A");

    assert_eq!(resolve_rendered_view(&student, ViewId::Upload), None);
    assert_eq!(
        resolve_rendered_view(&doctor, ViewId::Upload),
        Some(ViewId::Upload)
    );

    for view in [ViewId::Feed, ViewId::Profile, ViewId::Auth] {
        assert_eq!(resolve_rendered_view(&student, view), Some(view));
        assert_eq!(resolve_rendered_view(&doctor, view), Some(view));
    }
}

#[test]
fn resolution_is_deterministic() {
    let sessions = [
        Session::anonymous(),
        Session::authenticated(Role::Student, "S"),
        Session::authenticated(Role::Doctor, "D"),
    ];
    for session in &sessions {
        for view in ViewId::ALL {
            assert_eq!(
                resolve_rendered_view(session, view),
                resolve_rendered_view(&session.clone(), view)
            );
        }
    }
}

#[test]
fn navigate_always_records_request() {
    let mut state = AppState::new();
    state.login(Role::Student, "S");
    assert_eq!(state.navigate(ViewId::Upload), Transition::Navigated);
    assert_eq!(state.requested(), ViewId::Upload);
    assert_eq!(state.rendered_view(), None);
    assert!(state.session().is_authenticated());
}

#[test]
fn navigation_visibility_by_role() {
    assert_eq!(
        labels(&visible_navigation_items(Some(Role::Student))),
        ["Case Feed", "Profile", "Auth Flow"]
    );
    assert_eq!(
        labels(&visible_navigation_items(Some(Role::Doctor))),
        ["Case Feed", "Upload Case", "Profile", "Auth Flow"]
    );
    assert_eq!(
        labels(&visible_navigation_items(None)),
        ["Case Feed", "Profile", "Auth Flow"]
    );

    let hidden = navigation_items(None)
        .into_iter()
        .find(|item| item.target == ViewId::Upload)
        .expect("upload entry");
    assert!(!hidden.visible);
}

#[test]
fn state_navigation_tracks_session_role() {
    let mut state = AppState::new();
    assert_eq!(state.navigation(), navigation_items(None));
    state.login(Role::Doctor, "Dr. A");
    assert_eq!(state.navigation(), navigation_items(Some(Role::Doctor)));

    let active: Vec<_> = state
        .navigation()
        .into_iter()
        .filter(|item| item.is_active(state.requested()))
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].target, ViewId::Feed);
}

#[test]
fn events_serialize_with_type_tag() {
    let json = serde_json::to_value(SessionEvent::login(Role::Doctor, "Dr. A")).expect("json");
    assert_eq!(json["type"], "login");
    assert_eq!(json["role"], "doctor");
    let back: SessionEvent =
        serde_json::from_str(r#"{"type":"navigate","view":"profile"}"#).expect("parse");
    assert_eq!(back, SessionEvent::navigate(ViewId::Profile));
}
