use eframe::egui;

use crate::ui::theme::PALETTE;

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(226, 232, 240)))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(18, 14))
}

pub fn callout_frame(accent: egui::Color32) -> egui::Frame {
    egui::Frame::NONE
        .fill(accent.gamma_multiply(0.08))
        .stroke(egui::Stroke::new(1.0, accent.gamma_multiply(0.3)))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
}

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).strong().color(PALETTE.blue));
}

pub fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) -> egui::Response {
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.12))
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| ui.label(egui::RichText::new(text).small().color(color)))
        .inner
}

pub fn tag_row(ui: &mut egui::Ui, tags: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            badge(ui, tag, PALETTE.blue);
        }
    });
}

/// Removable chips; returns the index whose remove button was clicked.
pub fn removable_chips(ui: &mut egui::Ui, items: &[String]) -> Option<usize> {
    let mut removed = None;
    ui.horizontal_wrapped(|ui| {
        for (index, item) in items.iter().enumerate() {
            egui::Frame::NONE
                .fill(PALETTE.blue.gamma_multiply(0.12))
                .corner_radius(egui::CornerRadius::same(4))
                .inner_margin(egui::Margin::symmetric(6, 2))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(item).small().color(PALETTE.blue));
                        if ui.small_button("✕").clicked() {
                            removed = Some(index);
                        }
                    });
                });
        }
    });
    removed
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(PALETTE.blue)
}

/// Labeled single-line input with a hint.
pub fn text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    hint: &str,
    value: &mut String,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    ui.add(
        egui::TextEdit::singleline(value)
            .id_salt(id)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    )
}

pub fn text_area(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    hint: &str,
    value: &mut String,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    ui.add(
        egui::TextEdit::multiline(value)
            .id_salt(id)
            .hint_text(hint)
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    )
}
