use std::collections::HashSet;

use chrono::Utc;
use eframe::egui;
use shared::{
    cases::{relative_age, sample_feed, CaseStudy},
    domain::CaseId,
};

use crate::ui::{
    screens::{Screen, ScreenContext},
    theme::PALETTE,
    widgets,
};

pub struct FeedScreen {
    cases: Vec<CaseStudy>,
    expanded: HashSet<CaseId>,
}

impl Default for FeedScreen {
    fn default() -> Self {
        Self::new(sample_feed(Utc::now()))
    }
}

impl FeedScreen {
    pub fn new(cases: Vec<CaseStudy>) -> Self {
        Self {
            cases,
            expanded: HashSet::new(),
        }
    }

    fn toggle_expanded(&mut self, id: CaseId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    fn show_case_card(ui: &mut egui::Ui, case: &CaseStudy, expanded: bool) -> bool {
        let mut toggle = false;
        widgets::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("👤").size(22.0));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&case.author.name).strong().color(PALETTE.blue));
                    ui.label(egui::RichText::new(&case.author.title).small().color(PALETTE.gray));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(relative_age(case.created_at, Utc::now()));
                });
            });
            ui.add_space(6.0);

            widgets::section_heading(ui, "Patient Information");
            ui.label(format!("Age: {} years old", case.patient.age));
            ui.label(format!("Gender: {}", case.patient.gender));
            ui.add_space(4.0);

            widgets::section_heading(ui, "Clinical Presentation");
            ui.label(egui::RichText::new(&case.clinical_presentation).color(PALETTE.gray_dark));
            ui.add_space(4.0);

            widgets::section_heading(ui, "Radiographic Images");
            ui.horizontal_wrapped(|ui| {
                for index in 0..case.image_count {
                    widgets::callout_frame(PALETTE.gray).show(ui, |ui| {
                        ui.weak(format!("Medical Image {}", index + 1));
                    });
                }
            });

            if expanded {
                ui.separator();
                widgets::section_heading(ui, "Imaging Findings");
                ui.label(egui::RichText::new(&case.imaging_findings).color(PALETTE.gray_dark));

                widgets::section_heading(ui, "Differential Diagnosis");
                for diagnosis in &case.differential_diagnosis {
                    ui.label(format!("• {diagnosis}"));
                }

                ui.label(
                    egui::RichText::new("Final Diagnosis")
                        .strong()
                        .color(PALETTE.success),
                );
                ui.label(egui::RichText::new(&case.final_diagnosis).strong());

                widgets::section_heading(ui, "Teaching Discussion");
                ui.label(egui::RichText::new(&case.discussion).color(PALETTE.gray_dark));
            }

            ui.add_space(4.0);
            widgets::tag_row(ui, &case.tags);

            let toggle_label = if expanded {
                "⬆ Show Less"
            } else {
                "⬇ Show Full Case"
            };
            if ui
                .add_sized(
                    [ui.available_width(), 28.0],
                    egui::Button::new(egui::RichText::new(toggle_label).color(PALETTE.blue))
                        .frame(false),
                )
                .clicked()
            {
                toggle = true;
            }

            ui.separator();
            ui.horizontal(|ui| {
                let like_color = if case.is_liked {
                    PALETTE.success
                } else {
                    PALETTE.gray
                };
                ui.label(
                    egui::RichText::new(format!("⬆ {}", case.displayed_likes())).color(like_color),
                );
                ui.label(egui::RichText::new(format!("💬 {}", case.comments)).color(PALETTE.gray));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let saved = if case.is_saved { "🔖 Saved" } else { "🔖" };
                    ui.label(egui::RichText::new(saved).color(PALETTE.gray));
                });
            });
        });
        toggle
    }
}

impl Screen for FeedScreen {
    fn show(&mut self, ui: &mut egui::Ui, _cx: &mut ScreenContext<'_>) {
        ui.heading(egui::RichText::new("Medical Case Feed").color(PALETTE.blue));
        ui.label(
            egui::RichText::new(
                "Explore and learn from real medical cases shared by verified healthcare professionals",
            )
            .color(PALETTE.gray),
        );
        ui.add_space(12.0);

        let mut toggled = None;
        egui::ScrollArea::vertical()
            .id_salt("feed_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for case in &self.cases {
                    let expanded = self.expanded.contains(&case.id);
                    if Self::show_case_card(ui, case, expanded) {
                        toggled = Some(case.id);
                    }
                    ui.add_space(12.0);
                }
            });

        if let Some(id) = toggled {
            self.toggle_expanded(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_expands_and_collapses_a_single_card() {
        let mut screen = FeedScreen::default();
        let first = screen.cases[0].id;
        screen.toggle_expanded(first);
        assert!(screen.expanded.contains(&first));
        assert_eq!(screen.expanded.len(), 1);
        screen.toggle_expanded(first);
        assert!(screen.expanded.is_empty());
    }
}
