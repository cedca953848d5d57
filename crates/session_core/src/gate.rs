//! Role gates for every view, shared by the router, the navigation bar and
//! any screen that needs to ask "may this role reach that view?".

use serde::Serialize;
use shared::domain::{Role, ViewId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Open,
    Role(Role),
}

impl Gate {
    pub fn admits(self, role: Option<Role>) -> bool {
        match self {
            Gate::Open => true,
            Gate::Role(required) => role == Some(required),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GateEntry {
    pub view: ViewId,
    pub label: &'static str,
    pub gate: Gate,
}

/// Navigation order matches `ViewId::ALL`.
pub const GATES: [GateEntry; 4] = [
    GateEntry {
        view: ViewId::Feed,
        label: "Case Feed",
        gate: Gate::Open,
    },
    GateEntry {
        view: ViewId::Upload,
        label: "Upload Case",
        gate: Gate::Role(Role::Doctor),
    },
    GateEntry {
        view: ViewId::Profile,
        label: "Profile",
        gate: Gate::Open,
    },
    GateEntry {
        view: ViewId::Auth,
        label: "Auth Flow",
        gate: Gate::Open,
    },
];

pub fn entry(view: ViewId) -> &'static GateEntry {
    match view {
        ViewId::Feed => &GATES[0],
        ViewId::Upload => &GATES[1],
        ViewId::Profile => &GATES[2],
        ViewId::Auth => &GATES[3],
    }
}

pub fn is_permitted(role: Option<Role>, view: ViewId) -> bool {
    entry(view).gate.admits(role)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub label: &'static str,
    pub target: ViewId,
    pub visible: bool,
}

impl NavigationItem {
    pub fn is_active(&self, requested: ViewId) -> bool {
        self.target == requested
    }
}

/// Every view with its visibility for `role`; hidden entries are kept so the
/// caller can tell "hidden" from "absent".
pub fn navigation_items(role: Option<Role>) -> Vec<NavigationItem> {
    GATES
        .iter()
        .map(|entry| NavigationItem {
            label: entry.label,
            target: entry.view,
            visible: entry.gate.admits(role),
        })
        .collect()
}

pub fn visible_navigation_items(role: Option<Role>) -> Vec<NavigationItem> {
    navigation_items(role)
        .into_iter()
        .filter(|item| item.visible)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_view_order() {
        for (entry, view) in GATES.iter().zip(ViewId::ALL) {
            assert_eq!(entry.view, view);
            assert_eq!(super::entry(view).view, view);
        }
    }

    #[test]
    fn only_upload_is_role_gated() {
        for view in ViewId::ALL {
            let expected_open = view != ViewId::Upload;
            assert_eq!(is_permitted(Some(Role::Student), view), expected_open);
            assert_eq!(is_permitted(None, view), expected_open);
            assert!(is_permitted(Some(Role::Doctor), view));
        }
    }
}
