//! One [`Screen`] per view. Screens read the session and report user intent
//! through the UI event queue; they never touch `AppState` directly.

mod auth;
mod feed;
mod profile;
mod upload;

pub use auth::AuthScreen;
pub use feed::FeedScreen;
pub use profile::ProfileScreen;
pub use upload::UploadScreen;

use crossbeam_channel::Sender;
use eframe::egui;
use session_core::{Session, SessionEvent};
use shared::domain::ViewId;

use crate::controller::{events::UiEvent, orchestration::dispatch_ui_event};

pub struct ScreenContext<'a> {
    pub session: &'a Session,
    ui_tx: &'a Sender<UiEvent>,
    status: &'a mut String,
}

impl<'a> ScreenContext<'a> {
    pub fn new(session: &'a Session, ui_tx: &'a Sender<UiEvent>, status: &'a mut String) -> Self {
        Self {
            session,
            ui_tx,
            status,
        }
    }

    pub fn emit(&mut self, event: UiEvent) {
        dispatch_ui_event(self.ui_tx, event, self.status);
    }

    pub fn emit_session(&mut self, event: SessionEvent) {
        self.emit(UiEvent::Session(event));
    }
}

pub trait Screen {
    fn show(&mut self, ui: &mut egui::Ui, cx: &mut ScreenContext<'_>);
}

pub struct Screens {
    pub feed: FeedScreen,
    pub upload: UploadScreen,
    pub profile: ProfileScreen,
    pub auth: AuthScreen,
}

impl Screens {
    pub fn get_mut(&mut self, view: ViewId) -> &mut dyn Screen {
        match view {
            ViewId::Feed => &mut self.feed,
            ViewId::Upload => &mut self.upload,
            ViewId::Profile => &mut self.profile,
            ViewId::Auth => &mut self.auth,
        }
    }
}
