//! Styled text input component

use super::theme::{Colors, Styles};
use egui::{Response, TextEdit, Ui, Vec2};

pub struct StyledInput<'a> {
    text: &'a mut String,
    hint_text: Option<String>,
    desired_width: Option<f32>,
}

impl<'a> StyledInput<'a> {
    pub fn new(text: &'a mut String) -> Self {
        Self {
            text,
            hint_text: None,
            desired_width: None,
        }
    }

    pub fn hint_text(mut self, hint: impl Into<String>) -> Self {
        self.hint_text = Some(hint.into());
        self
    }

    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = Some(width);
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let mut text_edit = TextEdit::singleline(self.text);
        if let Some(hint) = self.hint_text {
            text_edit = text_edit.hint_text(hint);
        }

        let width = self.desired_width.unwrap_or_else(|| ui.available_width());
        let response = ui.add_sized(Vec2::new(width, Styles::INPUT_HEIGHT), text_edit);

        if response.has_focus() {
            ui.painter().rect_stroke(
                response.rect,
                Styles::rounding(),
                egui::Stroke::new(1.5, Colors::PRIMARY),
            );
        }

        response
    }
}
