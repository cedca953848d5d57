//! Reducer over the session and the requested view.

use serde::{Deserialize, Serialize};
use shared::domain::{Role, ViewId};
use tracing::{debug, info};

use crate::{
    gate::{self, NavigationItem},
    router::{resolve_rendered_view, ViewRouter},
    session::Session,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Login { role: Role, display_name: String },
    Logout,
    Navigate { view: ViewId },
}

impl SessionEvent {
    pub fn login(role: Role, display_name: impl Into<String>) -> Self {
        Self::Login {
            role,
            display_name: display_name.into(),
        }
    }

    pub fn navigate(view: ViewId) -> Self {
        Self::Navigate { view }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Login { .. } => "login",
            SessionEvent::Logout => "logout",
            SessionEvent::Navigate { .. } => "navigate",
        }
    }
}

/// What a dispatched event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    LoggedIn,
    LoggedOut,
    Navigated,
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    session: Session,
    router: ViewRouter,
}

impl AppState {
    /// Logged out, feed requested.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn requested(&self) -> ViewId {
        self.router.requested()
    }

    pub fn rendered_view(&self) -> Option<ViewId> {
        resolve_rendered_view(&self.session, self.router.requested())
    }

    pub fn navigation(&self) -> Vec<NavigationItem> {
        gate::navigation_items(self.session.role())
    }

    pub fn login(&mut self, role: Role, display_name: impl Into<String>) -> Transition {
        let display_name = display_name.into();
        info!(%role, display_name = %display_name, "session login");
        self.session.login(role, display_name);
        self.router.navigate(ViewId::Feed);
        Transition::LoggedIn
    }

    pub fn logout(&mut self) -> Transition {
        if !self.session.logout() {
            debug!("logout ignored; no active session");
            return Transition::Unchanged;
        }
        info!("session logout");
        self.router.navigate(ViewId::Auth);
        Transition::LoggedOut
    }

    pub fn navigate(&mut self, view: ViewId) -> Transition {
        let rendered = resolve_rendered_view(&self.session, view);
        debug!(%view, ?rendered, "navigate");
        self.router.navigate(view);
        Transition::Navigated
    }

    pub fn dispatch(&mut self, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::Login { role, display_name } => self.login(role, display_name),
            SessionEvent::Logout => self.logout(),
            SessionEvent::Navigate { view } => self.navigate(view),
        }
    }
}

/// Pure form of [`AppState::dispatch`].
pub fn apply(mut state: AppState, event: SessionEvent) -> AppState {
    state.dispatch(event);
    state
}
