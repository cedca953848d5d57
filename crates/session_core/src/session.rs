//! Authentication state of the single local user.

use serde::Serialize;
use shared::domain::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub role: Role,
    pub display_name: String,
}

/// In-memory session. Role and display name exist only while authenticated,
/// so they are held together behind a single `Option`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(role: Role, display_name: impl Into<String>) -> Self {
        Self {
            identity: Some(Identity {
                role,
                display_name: display_name.into(),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    /// Empty when logged out.
    pub fn display_name(&self) -> &str {
        self.identity
            .as_ref()
            .map(|identity| identity.display_name.as_str())
            .unwrap_or_default()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_doctor(&self) -> bool {
        self.role() == Some(Role::Doctor)
    }

    /// Replaces any current identity.
    pub(crate) fn login(&mut self, role: Role, display_name: String) {
        self.identity = Some(Identity { role, display_name });
    }

    /// Returns `false` when there was nothing to clear.
    pub(crate) fn logout(&mut self) -> bool {
        self.identity.take().is_some()
    }
}
