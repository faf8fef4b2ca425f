//! Core UI components and theme

pub mod button;
pub mod card;
pub mod input;
pub mod theme;

pub use button::{primary_button, secondary_button, ButtonStyle, StyledButton};
pub use card::{error_banner, Card};
pub use input::StyledInput;
pub use theme::{apply_theme, Colors, Spacing, Styles, Typography};
