//! Card container component

use egui::{Frame, Response, Ui};
use super::theme::{card_shadow, Colors, Spacing, Styles};

pub struct Card {
    padding: f32,
    width: Option<f32>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            padding: Spacing::MD,
            width: None,
        }
    }

    /// Fix the content width so cards line up in a wrapping row
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn show<R>(self, ui: &mut Ui, content: impl FnOnce(&mut Ui) -> R) -> (Response, R) {
        let frame = Frame::none()
            .fill(Colors::SURFACE)
            .stroke(Styles::border_stroke())
            .inner_margin(self.padding)
            .rounding(Styles::rounding())
            .shadow(card_shadow());

        let width = self.width;
        let response = frame.show(ui, |ui| {
            if let Some(width) = width {
                ui.set_width(width);
            }
            content(ui)
        });
        (response.response, response.inner)
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

/// Full-width error strip shown above the assignment list
pub fn error_banner(ui: &mut Ui, message: &str) -> Response {
    Frame::none()
        .fill(Colors::ERROR_BG)
        .stroke(egui::Stroke::new(1.0, Colors::ERROR))
        .inner_margin(Spacing::SM)
        .rounding(Styles::rounding())
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(Colors::ERROR, message);
        })
        .response
}
