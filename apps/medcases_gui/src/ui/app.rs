use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use session_core::{AppState, SessionEvent, Transition};
use shared::domain::{Role, ViewId};

use crate::{
    config::Settings,
    controller::{
        events::{err_label, UiError, UiErrorContext, UiEvent},
        orchestration::{dispatch_ui_event, transition_status},
    },
    ui::{
        screens::{
            AuthScreen, FeedScreen, ProfileScreen, Screen, ScreenContext, Screens, UploadScreen,
        },
        theme::PALETTE,
        widgets,
    },
};

pub struct MedCasesApp {
    state: AppState,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    screens: Screens,
    status: String,
    status_banner: Option<UiError>,
}

impl MedCasesApp {
    pub fn new(ui_tx: Sender<UiEvent>, ui_rx: Receiver<UiEvent>, settings: &Settings) -> Self {
        Self {
            state: AppState::new(),
            ui_tx,
            ui_rx,
            screens: Screens {
                feed: FeedScreen::default(),
                upload: UploadScreen::default(),
                profile: ProfileScreen::default(),
                auth: AuthScreen::new(settings.demo_accounts()),
            },
            status: "Not signed in".to_string(),
            status_banner: None,
        }
    }

    fn send(&mut self, event: UiEvent) {
        if !dispatch_ui_event(&self.ui_tx, event, &mut self.status) {
            self.status_banner = Some(UiError::from_message(
                UiErrorContext::General,
                self.status.clone(),
            ));
        }
    }

    /// Applies every queued event in arrival order.
    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Session(event) => {
                    let transition = self.state.dispatch(event);
                    if let Some(status) = transition_status(transition, &self.state) {
                        self.status = status;
                    }
                    match transition {
                        Transition::LoggedIn => {
                            self.status_banner = None;
                            self.screens.auth.reset();
                        }
                        Transition::LoggedOut => {
                            self.status_banner = None;
                            self.screens.auth.reset();
                            self.screens.upload.reset();
                            self.screens.profile.reset();
                        }
                        Transition::Navigated | Transition::Unchanged => {}
                    }
                }
                UiEvent::ShowSignUp => self.screens.auth.open_sign_up(),
                UiEvent::Info(message) => {
                    self.status = message;
                    self.status_banner = None;
                }
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), "{}", err.message());
                    self.status = err.message().to_string();
                    self.status_banner = Some(err);
                }
            }
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let role = self.state.session().role();
        let name = self.state.session().display_name().to_string();
        egui::TopBottomPanel::top("medcases_header")
            .frame(
                egui::Frame::NONE
                    .fill(egui::Color32::WHITE)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("🩺 MedCases")
                            .heading()
                            .strong()
                            .color(PALETTE.blue_dark),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let Some(role) = role else {
                            if ui.add(widgets::primary_button("Join Community")).clicked() {
                                self.send(UiEvent::Session(SessionEvent::navigate(ViewId::Auth)));
                                self.send(UiEvent::ShowSignUp);
                            }
                            if ui.button("Sign In").clicked() {
                                self.send(UiEvent::Session(SessionEvent::navigate(ViewId::Auth)));
                            }
                            return;
                        };
                        if ui.button("Sign out").clicked() {
                            self.send(UiEvent::Session(SessionEvent::Logout));
                        }
                        if session_core::gate::is_permitted(Some(role), ViewId::Upload)
                            && ui.add(widgets::primary_button("➕ Upload Case")).clicked()
                        {
                            self.send(UiEvent::Session(SessionEvent::navigate(ViewId::Upload)));
                        }
                        let badge_color = match role {
                            Role::Doctor => PALETTE.blue,
                            Role::Student => PALETTE.success,
                        };
                        widgets::badge(ui, role.label(), badge_color);
                        ui.label(egui::RichText::new(name).strong());
                    });
                });
            });
    }

    fn show_navigation(&mut self, ctx: &egui::Context) {
        let requested = self.state.requested();
        let items = self.state.navigation();
        egui::TopBottomPanel::top("medcases_navigation")
            .frame(
                egui::Frame::NONE
                    .fill(PALETTE.gray_light)
                    .inner_margin(egui::Margin::symmetric(16, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for item in items.iter().filter(|item| item.visible) {
                        let active = item.is_active(requested);
                        let text = if active {
                            egui::RichText::new(item.label).strong().color(PALETTE.blue)
                        } else {
                            egui::RichText::new(item.label).color(PALETTE.gray_dark)
                        };
                        if ui.add(egui::Button::new(text).selected(active)).clicked() {
                            self.send(UiEvent::Session(SessionEvent::navigate(item.target)));
                        }
                    }
                });
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("medcases_status")
            .frame(
                egui::Frame::NONE
                    .fill(egui::Color32::WHITE)
                    .inner_margin(egui::Margin::symmetric(16, 4)),
            )
            .show(ctx, |ui| {
                let mut dismiss = false;
                if let Some(err) = &self.status_banner {
                    widgets::callout_frame(PALETTE.danger).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(err_label(err.category()))
                                    .strong()
                                    .color(PALETTE.danger),
                            );
                            ui.label(err.message());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("✕").clicked() {
                                        dismiss = true;
                                    }
                                },
                            );
                        });
                    });
                }
                if dismiss {
                    self.status_banner = None;
                }
                ui.small(egui::RichText::new(&self.status).color(PALETTE.gray));
            });
    }

    fn show_view(&mut self, ui: &mut egui::Ui, view: ViewId) {
        let mut cx = ScreenContext::new(self.state.session(), &self.ui_tx, &mut self.status);
        self.screens.get_mut(view).show(ui, &mut cx);
    }
}

impl eframe::App for MedCasesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        if !self.state.session().is_authenticated() && self.state.requested() != ViewId::Auth {
            egui::CentralPanel::default().show(ctx, |ui| self.show_view(ui, ViewId::Auth));
            return;
        }

        self.show_header(ctx);
        self.show_navigation(ctx);
        self.show_status_bar(ctx);

        let rendered = self.state.rendered_view();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::NONE
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    if let Some(view) = rendered {
                        self.show_view(ui, view);
                    }
                });
        });
    }
}
