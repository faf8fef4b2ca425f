//! Feature modules for the application views

pub mod board_view;

pub use board_view::{download_area, BoardAction, BoardView, DownloadArea};
