//! Application shell

pub mod app;
pub mod dialogs;

pub use app::AssignmentBoardApp;
pub use dialogs::DialogTarget;
