use eframe::egui;
use session_core::ProfileCard;
use shared::{
    cases::{sample_posted_cases, sample_saved_cases, ProfileCase},
    domain::Role,
};

use crate::ui::{
    screens::{Screen, ScreenContext},
    theme::PALETTE,
    widgets,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Saved,
    Posted,
}

pub struct ProfileScreen {
    tab: ProfileTab,
    saved: Vec<ProfileCase>,
    posted: Vec<ProfileCase>,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self {
            tab: ProfileTab::Saved,
            saved: sample_saved_cases(),
            posted: sample_posted_cases(),
        }
    }
}

impl ProfileScreen {
    pub fn reset(&mut self) {
        self.tab = ProfileTab::Saved;
    }

    fn show_case_row(ui: &mut egui::Ui, case: &ProfileCase) {
        widgets::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&case.title).strong().color(PALETTE.blue));
            ui.small(format!(
                "{} year old {}",
                case.patient_age,
                case.patient_gender.label().to_lowercase()
            ));
            widgets::tag_row(ui, &case.tags);
            if let (Some(likes), Some(comments)) = (case.likes, case.comments) {
                ui.small(format!("{likes} likes · {comments} comments"));
            }
        });
        ui.add_space(8.0);
    }
}

impl Screen for ProfileScreen {
    fn show(&mut self, ui: &mut egui::Ui, cx: &mut ScreenContext<'_>) {
        let Some(card) = ProfileCard::for_session(cx.session) else {
            return;
        };
        if !card.shows_posted_cases {
            self.tab = ProfileTab::Saved;
        }

        widgets::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("👤").size(48.0));
                ui.vertical(|ui| {
                    ui.heading(egui::RichText::new(&card.name).color(PALETTE.blue));
                    ui.label(egui::RichText::new(card.title).color(PALETTE.gray));
                    let badge_color = match card.role {
                        Role::Doctor => PALETTE.blue,
                        Role::Student => PALETTE.success,
                    };
                    widgets::badge(ui, card.badge, badge_color);
                });
            });
            ui.add_space(6.0);
            ui.label(egui::RichText::new(card.bio).color(PALETTE.gray_dark));
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, ProfileTab::Saved, "🔖 Saved Cases");
            if card.shows_posted_cases {
                ui.selectable_value(&mut self.tab, ProfileTab::Posted, "📄 Posted Cases");
            }
        });
        ui.separator();

        let cases = match self.tab {
            ProfileTab::Saved => &self.saved,
            ProfileTab::Posted => &self.posted,
        };
        egui::ScrollArea::vertical()
            .id_salt("profile_cases_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for case in cases {
                    Self::show_case_row(ui, case);
                }
            });
    }
}
