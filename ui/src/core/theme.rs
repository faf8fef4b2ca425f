//! Dashboard theme
//! Light, low-contrast surfaces with a single accent for actions

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

// Color Palette
pub struct Colors;

impl Colors {
    // Surfaces
    pub const BACKGROUND: Color32 = Color32::from_rgb(244, 245, 247);
    pub const SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const HEADER: Color32 = Color32::from_rgb(33, 47, 61);
    pub const BORDER: Color32 = Color32::from_rgb(218, 222, 228);

    // Actions
    pub const PRIMARY: Color32 = Color32::from_rgb(40, 116, 166); // Submit
    pub const SECONDARY: Color32 = Color32::from_rgb(93, 109, 126); // Download, choose file

    // Text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(33, 37, 41);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(108, 117, 125);
    pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

    // Status
    pub const SUBMITTED: Color32 = Color32::from_rgb(39, 174, 96);
    pub const PENDING: Color32 = Color32::from_rgb(230, 126, 34);
    pub const ERROR: Color32 = Color32::from_rgb(192, 57, 43);
    pub const ERROR_BG: Color32 = Color32::from_rgb(253, 236, 234);
}

// Typography
pub struct Typography;

impl Typography {
    pub const FONT_TITLE: f32 = 22.0;
    pub const FONT_HEADING: f32 = 17.0;
    pub const FONT_BODY: f32 = 14.0;
    pub const FONT_SMALL: f32 = 12.0;

    pub fn heading() -> FontId {
        FontId::new(Self::FONT_HEADING, FontFamily::Proportional)
    }

    pub fn body() -> FontId {
        FontId::new(Self::FONT_BODY, FontFamily::Proportional)
    }

    pub fn small() -> FontId {
        FontId::new(Self::FONT_SMALL, FontFamily::Proportional)
    }
}

// Spacing
pub struct Spacing;

impl Spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub struct Styles;

impl Styles {
    pub const BORDER_RADIUS: f32 = 6.0;
    pub const INPUT_HEIGHT: f32 = 28.0;
    pub const CARD_WIDTH: f32 = 280.0;

    pub fn rounding() -> Rounding {
        Rounding::same(Self::BORDER_RADIUS)
    }

    pub fn border_stroke() -> Stroke {
        Stroke::new(1.0, Colors::BORDER)
    }
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = Style::default();
    let mut visuals = Visuals::light();

    visuals.window_fill = Colors::SURFACE;
    visuals.panel_fill = Colors::BACKGROUND;
    visuals.window_stroke = Styles::border_stroke();
    visuals.window_rounding = Styles::rounding();

    visuals.widgets.noninteractive.bg_stroke = Styles::border_stroke();
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Colors::TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Styles::rounding();
    visuals.widgets.hovered.rounding = Styles::rounding();
    visuals.widgets.active.rounding = Styles::rounding();

    visuals.selection.bg_fill = Colors::PRIMARY.linear_multiply(0.25);
    visuals.selection.stroke = Stroke::new(1.0, Colors::PRIMARY);
    visuals.hyperlink_color = Colors::PRIMARY;
    visuals.error_fg_color = Colors::ERROR;

    style.visuals = visuals;

    let mut text_styles = BTreeMap::new();
    text_styles.insert(TextStyle::Heading, Typography::heading());
    text_styles.insert(TextStyle::Body, Typography::body());
    text_styles.insert(TextStyle::Small, Typography::small());
    text_styles.insert(TextStyle::Button, Typography::body());
    text_styles.insert(
        TextStyle::Monospace,
        FontId::new(Typography::FONT_BODY, FontFamily::Monospace),
    );
    style.text_styles = text_styles;

    style.spacing.item_spacing = egui::vec2(Spacing::SM, Spacing::SM);
    style.spacing.button_padding = egui::vec2(Spacing::MD, Spacing::XS);

    ctx.set_style(style);
}

pub fn card_shadow() -> egui::Shadow {
    egui::epaint::Shadow {
        offset: egui::vec2(0.0, 1.0),
        blur: 4.0,
        spread: 0.0,
        color: Color32::from_black_alpha(20),
    }
}
