use serde::Serialize;
use shared::domain::ViewId;

use crate::{gate, session::Session};

/// Holds the view the user asked for. Writes are never rejected; gating
/// happens in [`resolve_rendered_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewRouter {
    requested: ViewId,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self {
            requested: ViewId::Feed,
        }
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> ViewId {
        self.requested
    }

    pub fn navigate(&mut self, target: ViewId) {
        self.requested = target;
    }
}

/// Which screen to mount for `requested` under `session`. `None` means the
/// main region stays empty (a role gate rejected the request).
pub fn resolve_rendered_view(session: &Session, requested: ViewId) -> Option<ViewId> {
    if !session.is_authenticated() && requested != ViewId::Auth {
        return Some(ViewId::Auth);
    }
    if !gate::is_permitted(session.role(), requested) {
        return None;
    }
    Some(requested)
}
