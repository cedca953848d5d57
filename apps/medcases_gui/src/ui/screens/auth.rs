use eframe::egui;
use session_core::{AuthFlow, AuthStep, DemoAccounts, SignInOutcome, SignUpOutcome};
use shared::domain::Role;

use crate::{
    controller::events::{UiError, UiErrorContext, UiEvent},
    ui::{
        screens::{Screen, ScreenContext},
        theme::PALETTE,
        widgets,
    },
};

pub struct AuthScreen {
    flow: AuthFlow,
    demo: DemoAccounts,
}

impl AuthScreen {
    pub fn new(demo: DemoAccounts) -> Self {
        Self {
            flow: AuthFlow::new(),
            demo,
        }
    }

    pub fn reset(&mut self) {
        self.flow.reset();
    }

    pub fn open_sign_up(&mut self) {
        if self.flow.step() == AuthStep::SignIn {
            self.flow.toggle_mode();
        }
    }

    fn sign_up_event(outcome: SignUpOutcome) -> UiEvent {
        match outcome {
            SignUpOutcome::VerificationRequired => {
                UiEvent::Info("Doctor accounts need verification before access".to_string())
            }
            SignUpOutcome::StudentAccepted => UiEvent::Info(
                "Student sign-up received; use a demo account to explore".to_string(),
            ),
            SignUpOutcome::RoleMissing => UiEvent::Error(UiError::from_message(
                UiErrorContext::Auth,
                "Select whether you are a doctor or a student",
            )),
        }
    }

    fn sign_in_event(outcome: SignInOutcome) -> UiEvent {
        match outcome {
            SignInOutcome::NotAvailable => UiEvent::Info(
                "Email sign-in is not available yet; use a demo account".to_string(),
            ),
        }
    }

    fn demo_button(&self, ui: &mut egui::Ui, role: Role, label: &str, cx: &mut ScreenContext<'_>) {
        let button = match role {
            Role::Doctor => widgets::primary_button(label),
            Role::Student => egui::Button::new(egui::RichText::new(label.to_string()).color(PALETTE.blue))
                .stroke(egui::Stroke::new(1.0, PALETTE.blue)),
        };
        if ui
            .add_sized([ui.available_width(), 30.0], button)
            .clicked()
        {
            cx.emit_session(self.flow.demo_login(role, &self.demo));
        }
    }

    fn show_demo_accounts(&self, ui: &mut egui::Ui, cx: &mut ScreenContext<'_>) {
        widgets::callout_frame(PALETTE.blue).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("▶ Try Demo Accounts")
                    .strong()
                    .color(PALETTE.blue),
            );
            self.demo_button(ui, Role::Doctor, "Demo Doctor Account", cx);
            self.demo_button(ui, Role::Student, "Demo Student Account", cx);
            ui.small("Explore all features without creating an account");
        });
    }

    fn show_credentials_form(&mut self, ui: &mut egui::Ui, cx: &mut ScreenContext<'_>) {
        let signing_up = self.flow.step() == AuthStep::SignUp;
        let (title, subtitle) = if signing_up {
            (
                "Join MedCases",
                "Create your account to start learning and sharing",
            )
        } else {
            (
                "Welcome Back",
                "Sign in to access medical cases and discussions",
            )
        };

        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new(title).color(PALETTE.blue));
            ui.label(egui::RichText::new(subtitle).color(PALETTE.gray));
        });
        ui.add_space(8.0);

        self.show_demo_accounts(ui, cx);
        ui.separator();

        if signing_up {
            widgets::text_field(
                ui,
                "auth_name",
                "Full Name",
                "Dr. John Smith",
                &mut self.flow.form.name,
            );
            ui.label(egui::RichText::new("I am a...").strong());
            let mut selected = self.flow.selected_role();
            egui::ComboBox::from_id_salt("auth_role")
                .selected_text(selected.map(Role::label).unwrap_or("Select your role"))
                .show_ui(ui, |ui| {
                    for role in Role::ALL {
                        ui.selectable_value(&mut selected, Some(role), role.label());
                    }
                });
            if let Some(role) = selected {
                self.flow.select_role(role);
            }

            if let Some(notice) = self.flow.role_notice() {
                let color = match self.flow.selected_role() {
                    Some(Role::Doctor) => PALETTE.blue,
                    _ => PALETTE.success,
                };
                widgets::callout_frame(color).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    widgets::badge(ui, notice.badge, color);
                    ui.small(notice.detail);
                });
            }
        }

        widgets::text_field(
            ui,
            "auth_email",
            "Email",
            "your@email.com",
            &mut self.flow.form.email,
        );
        ui.label(egui::RichText::new("Password").strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.flow.form.password)
                .id_salt("auth_password")
                .password(true)
                .hint_text("••••••••")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let submit_label = if signing_up { "Create Account" } else { "Sign In" };
        if ui
            .add_sized(
                [ui.available_width(), 34.0],
                widgets::primary_button(submit_label),
            )
            .clicked()
        {
            let event = if signing_up {
                Self::sign_up_event(self.flow.sign_up())
            } else {
                Self::sign_in_event(self.flow.sign_in())
            };
            cx.emit(event);
        }

        ui.separator();
        ui.vertical_centered(|ui| {
            let (prompt, action) = if signing_up {
                ("Already have an account?", "Sign In")
            } else {
                ("Don't have an account?", "Sign Up")
            };
            ui.small(prompt);
            if ui.link(action).clicked() {
                self.flow.toggle_mode();
            }
        });
    }

    fn show_verification(&mut self, ui: &mut egui::Ui, cx: &mut ScreenContext<'_>) {
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("Doctor Verification Required").color(PALETTE.blue));
            ui.label(
                egui::RichText::new(
                    "To maintain the quality of our medical community, all doctors must be manually verified before accessing the platform.",
                )
                .color(PALETTE.gray),
            );
        });
        ui.add_space(8.0);

        widgets::callout_frame(PALETTE.blue).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("▶ Try Demo Mode").strong().color(PALETTE.blue));
            ui.small("Want to explore the platform right away? Use our demo doctor account.");
            self.demo_button(ui, Role::Doctor, "Enter as Demo Doctor", cx);
        });
        ui.add_space(6.0);

        widgets::callout_frame(PALETTE.warning).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("⚠ Verification Process")
                    .strong()
                    .color(PALETTE.warning),
            );
            ui.small(
                "Please provide your medical credentials below. Our team will review your application within 24-48 hours.",
            );
        });
        ui.add_space(6.0);

        widgets::text_field(
            ui,
            "verify_institution",
            "Medical Institution/Hospital",
            "e.g., Johns Hopkins Hospital",
            &mut self.flow.form.institution,
        );
        widgets::text_field(
            ui,
            "verify_credentials",
            "Medical License Number",
            "Your medical license or registration number",
            &mut self.flow.form.credentials,
        );
        widgets::text_area(
            ui,
            "verify_bio",
            "Professional Bio",
            "Brief description of your medical background and specialization...",
            &mut self.flow.form.bio,
        );
        ui.add_space(8.0);

        if ui
            .add_sized(
                [ui.available_width(), 34.0],
                widgets::primary_button("Submit for Verification"),
            )
            .clicked()
        {
            let request = self.flow.submit_verification();
            let message = if request.has_license_number {
                "Verification request recorded; expect a review within 24-48 hours".to_string()
            } else {
                "Verification request recorded without a license number".to_string()
            };
            cx.emit(UiEvent::Info(message));
        }

        widgets::callout_frame(PALETTE.success).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("✔ What happens next?")
                    .strong()
                    .color(PALETTE.success),
            );
            for line in [
                "Our verification team will review your credentials",
                "You'll receive an email notification within 24-48 hours",
                "Once approved, you can access all platform features",
                "You'll be able to upload cases and participate in discussions",
            ] {
                ui.small(format!("• {line}"));
            }
        });
    }
}

impl Screen for AuthScreen {
    fn show(&mut self, ui: &mut egui::Ui, cx: &mut ScreenContext<'_>) {
        let avail = ui.available_size();
        let card_width = avail.x.clamp(380.0, 560.0);
        ui.add_space((avail.y * 0.06).clamp(12.0, 60.0));

        egui::ScrollArea::vertical()
            .id_salt("auth_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(card_width);
                    widgets::card_frame().show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(8.0, 8.0);
                        match self.flow.step() {
                            AuthStep::SignIn | AuthStep::SignUp => {
                                self.show_credentials_form(ui, cx)
                            }
                            AuthStep::DoctorVerification => self.show_verification(ui, cx),
                        }
                    });
                });
            });
    }
}
