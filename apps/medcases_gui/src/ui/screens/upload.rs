use eframe::egui;
use shared::{
    domain::Gender,
    draft::{CaseDraft, CaseSubmission, DraftError},
};
use tracing::info;

use crate::{
    controller::events::{UiError, UiErrorContext, UiEvent},
    ui::{
        screens::{Screen, ScreenContext},
        theme::PALETTE,
        widgets,
    },
};

#[derive(Default)]
pub struct UploadScreen {
    draft: CaseDraft,
    differential_input: String,
    tag_input: String,
}

impl UploadScreen {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn add_differential(&mut self) {
        if self.draft.add_differential(&self.differential_input) {
            self.differential_input.clear();
        }
    }

    fn add_tag(&mut self) {
        if self.draft.add_tag(&self.tag_input) {
            self.tag_input.clear();
        }
    }

    fn save_as_draft(&self) -> String {
        info!(
            differentials = self.draft.differential_diagnoses.len(),
            tags = self.draft.tags.len(),
            "case draft saved locally"
        );
        "Draft kept for this session".to_string()
    }

    /// Validates and clears the form on success.
    fn publish(&mut self) -> Result<CaseSubmission, DraftError> {
        let submission = self.draft.submission()?;
        info!(
            final_diagnosis = %submission.final_diagnosis,
            tags = ?submission.tags,
            "case ready to publish"
        );
        self.reset();
        Ok(submission)
    }

    fn show_list_editor(
        ui: &mut egui::Ui,
        id: &'static str,
        hint: &str,
        input: &mut String,
        items: &[String],
    ) -> (bool, Option<usize>) {
        let mut add = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(input)
                    .id_salt(id)
                    .hint_text(hint)
                    .desired_width(ui.available_width() - 70.0),
            );
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("➕ Add").clicked() || enter {
                add = true;
            }
        });
        let removed = widgets::removable_chips(ui, items);
        (add, removed)
    }
}

impl Screen for UploadScreen {
    fn show(&mut self, ui: &mut egui::Ui, cx: &mut ScreenContext<'_>) {
        egui::ScrollArea::vertical()
            .id_salt("upload_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                widgets::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.heading(egui::RichText::new("Upload New Case").color(PALETTE.blue));
                    ui.label(
                        egui::RichText::new(
                            "Share your knowledge with the medical community by uploading a detailed case study",
                        )
                        .color(PALETTE.gray),
                    );
                    ui.add_space(10.0);

                    ui.columns(2, |columns| {
                        widgets::text_field(
                            &mut columns[0],
                            "upload_patient_age",
                            "Patient Age",
                            "e.g., 45",
                            &mut self.draft.patient_age,
                        );
                        columns[1].label(egui::RichText::new("Patient Gender").strong());
                        egui::ComboBox::from_id_salt("upload_patient_gender")
                            .selected_text(
                                self.draft
                                    .patient_gender
                                    .map(Gender::label)
                                    .unwrap_or("Select gender"),
                            )
                            .show_ui(&mut columns[1], |ui| {
                                for gender in Gender::ALL {
                                    ui.selectable_value(
                                        &mut self.draft.patient_gender,
                                        Some(gender),
                                        gender.label(),
                                    );
                                }
                            });
                    });
                    ui.add_space(6.0);

                    widgets::text_area(
                        ui,
                        "upload_presentation",
                        "Clinical Presentation",
                        "Describe the patient's presenting symptoms, history, and clinical context...",
                        &mut self.draft.clinical_presentation,
                    );
                    ui.add_space(6.0);

                    ui.label(egui::RichText::new("Radiographic Images").strong());
                    widgets::callout_frame(PALETTE.gray).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.weak("Image upload is not available in this build");
                            ui.small("DICOM, JPEG, PNG files up to 10MB each");
                        });
                    });
                    ui.add_space(6.0);

                    widgets::text_area(
                        ui,
                        "upload_findings",
                        "Imaging Findings",
                        "Describe the key imaging findings and abnormalities...",
                        &mut self.draft.imaging_findings,
                    );
                    ui.add_space(6.0);

                    ui.label(egui::RichText::new("Differential Diagnosis").strong());
                    let (add, removed) = Self::show_list_editor(
                        ui,
                        "upload_differential",
                        "Add a differential diagnosis",
                        &mut self.differential_input,
                        &self.draft.differential_diagnoses,
                    );
                    if add {
                        self.add_differential();
                    }
                    if let Some(index) = removed {
                        self.draft.remove_differential(index);
                    }
                    ui.add_space(6.0);

                    widgets::text_field(
                        ui,
                        "upload_final_diagnosis",
                        "Final Diagnosis",
                        "Enter the confirmed diagnosis",
                        &mut self.draft.final_diagnosis,
                    );
                    ui.add_space(6.0);

                    widgets::text_area(
                        ui,
                        "upload_discussion",
                        "Teaching Discussion",
                        "Provide educational insights, key learning points, and clinical pearls...",
                        &mut self.draft.discussion,
                    );
                    ui.add_space(6.0);

                    ui.label(egui::RichText::new("Tags").strong());
                    let (add, removed) = Self::show_list_editor(
                        ui,
                        "upload_tag",
                        "Add a tag (e.g., Chest CT, Pediatric)",
                        &mut self.tag_input,
                        &self.draft.tags,
                    );
                    if add {
                        self.add_tag();
                    }
                    if let Some(index) = removed {
                        self.draft.remove_tag(index);
                    }
                    ui.add_space(12.0);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(widgets::primary_button("Publish Case")).clicked() {
                            match self.publish() {
                                Ok(_) => cx.emit(UiEvent::Info("Case published".to_string())),
                                Err(err) => cx.emit(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::Upload,
                                    err.to_string(),
                                ))),
                            }
                        }
                        if ui.button("Save as Draft").clicked() {
                            let message = self.save_as_draft();
                            cx.emit(UiEvent::Info(message));
                        }
                    });
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_clears_input_only_when_accepted() {
        let mut screen = UploadScreen::default();
        screen.tag_input = " MRI ".to_string();
        screen.add_tag();
        assert!(screen.tag_input.is_empty());
        assert_eq!(screen.draft.tags, vec!["MRI"]);

        screen.tag_input = "MRI".to_string();
        screen.add_tag();
        assert_eq!(screen.tag_input, "MRI");
        assert_eq!(screen.draft.tags.len(), 1);
    }

    #[test]
    fn publish_clears_form_only_on_success() {
        let mut screen = UploadScreen::default();
        screen.draft.clinical_presentation = "Cough for 3 weeks".to_string();
        assert_eq!(screen.publish(), Err(DraftError::MissingDiagnosis));
        assert!(!screen.draft.is_empty());

        screen.draft.final_diagnosis = "Lymphoma".to_string();
        let submission = screen.publish().expect("publishable");
        assert_eq!(submission.final_diagnosis, "Lymphoma");
        assert!(screen.draft.is_empty());
    }
}
