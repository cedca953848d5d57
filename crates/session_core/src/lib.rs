//! Session and navigation state for the MedCases client.
//!
//! [`AppState`] owns the [`Session`] and the requested view; every screen reads
//! from it and every user action goes through [`AppState::dispatch`] (or the
//! pure [`apply`]). Role gating lives in [`gate`] and is applied when the
//! rendered view is resolved, never when navigation is requested.

pub mod auth_flow;
pub mod gate;
pub mod profile;
pub mod router;
pub mod session;
pub mod state;

pub use auth_flow::{AuthFlow, AuthStep, DemoAccounts, SignInOutcome, SignUpOutcome};
pub use gate::{navigation_items, visible_navigation_items, NavigationItem};
pub use profile::ProfileCard;
pub use router::{resolve_rendered_view, ViewRouter};
pub use session::{Identity, Session};
pub use state::{apply, AppState, SessionEvent, Transition};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
