//! Application style configuration

use eframe::egui;

/// Dark theme with the configured font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();

    let radius = egui::CornerRadius::same(3);
    for w in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        w.corner_radius = radius;
    }
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);

    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 3.0);

    style.visuals.panel_fill = egui::Color32::from_rgb(30, 30, 34);
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(40, 110, 70);

    set_text_sizes(&mut style, font_size);
    ctx.set_style(style);
}

/// Re-apply text sizes after the font size setting changed
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    set_text_sizes(&mut style, font_size);
    ctx.set_style(style);
}

fn set_text_sizes(style: &mut egui::Style, font_size: f32) {
    let sizes = [
        (egui::TextStyle::Body, egui::FontId::proportional(font_size)),
        (egui::TextStyle::Button, egui::FontId::proportional(font_size)),
        (egui::TextStyle::Small, egui::FontId::proportional(font_size * 0.85)),
        (egui::TextStyle::Heading, egui::FontId::proportional(font_size * 1.3)),
        (egui::TextStyle::Monospace, egui::FontId::monospace(font_size)),
    ];
    style.text_styles.extend(sizes);
}
