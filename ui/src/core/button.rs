//! Styled button component

use egui::{Color32, Response, RichText, Ui, Widget};
use super::theme::{Colors, Styles};

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
}

pub struct StyledButton {
    text: String,
    style: ButtonStyle,
    enabled: bool,
}

impl StyledButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: ButtonStyle::Primary,
            enabled: true,
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn fill(&self) -> Color32 {
        let base = match self.style {
            ButtonStyle::Primary => Colors::PRIMARY,
            ButtonStyle::Secondary => Colors::SECONDARY,
        };
        if self.enabled {
            base
        } else {
            base.linear_multiply(0.4)
        }
    }
}

impl Widget for StyledButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let text = RichText::new(&self.text).color(Colors::TEXT_ON_ACCENT);
        let button = egui::Button::new(text)
            .rounding(Styles::rounding())
            .fill(self.fill());

        ui.add_enabled(self.enabled, button)
    }
}

pub fn primary_button(text: impl Into<String>) -> StyledButton {
    StyledButton::new(text).style(ButtonStyle::Primary)
}

pub fn secondary_button(text: impl Into<String>) -> StyledButton {
    StyledButton::new(text).style(ButtonStyle::Secondary)
}
