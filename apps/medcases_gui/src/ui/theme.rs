use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct MedicalPalette {
    pub blue: egui::Color32,
    pub blue_dark: egui::Color32,
    pub gray: egui::Color32,
    pub gray_dark: egui::Color32,
    pub gray_light: egui::Color32,
    pub success: egui::Color32,
    pub warning: egui::Color32,
    pub danger: egui::Color32,
}

pub const PALETTE: MedicalPalette = MedicalPalette {
    blue: egui::Color32::from_rgb(30, 86, 160),
    blue_dark: egui::Color32::from_rgb(21, 62, 117),
    gray: egui::Color32::from_rgb(107, 114, 128),
    gray_dark: egui::Color32::from_rgb(55, 65, 81),
    gray_light: egui::Color32::from_rgb(243, 246, 250),
    success: egui::Color32::from_rgb(22, 163, 74),
    warning: egui::Color32::from_rgb(217, 119, 6),
    danger: egui::Color32::from_rgb(185, 28, 28),
};

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PALETTE.gray_light;
    visuals.window_fill = egui::Color32::WHITE;
    visuals.faint_bg_color = egui::Color32::from_rgb(249, 250, 251);
    visuals.hyperlink_color = PALETTE.blue;
    visuals.selection.bg_fill = PALETTE.blue.gamma_multiply(0.25);
    visuals.selection.stroke = egui::Stroke::new(1.0, PALETTE.blue);
    visuals.widgets.hovered.weak_bg_fill = PALETTE.blue.gamma_multiply(0.08);

    let radius = egui::CornerRadius::same(6);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;

    visuals
}

pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(visuals());
}
