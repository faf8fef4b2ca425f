//! Main application state and logic

use assignment_board_core::{AssignmentBoard, AssignmentId, SaveTarget, SubmittedFile};
use egui::{CentralPanel, RichText, TopBottomPanel};
use std::path::Path;
use tracing::{error, info};

use crate::app::dialogs::{pick_submission_file, DialogTarget};
use crate::config::AppConfig;
use crate::core::{apply_theme, Colors, Spacing};
use crate::features::{BoardAction, BoardView};

pub struct AssignmentBoardApp {
    board: AssignmentBoard,
    board_view: BoardView,
    config: AppConfig,

    /// Outcome of the last file pick or download, shown in the header
    notice: Option<String>,
}

impl AssignmentBoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        apply_theme(&cc.egui_ctx);
        Self::with_config(config)
    }

    /// Build the app without a window, e.g. for headless tests
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            board: AssignmentBoard::seeded(),
            board_view: BoardView::new(config.course_title.clone()),
            config,
            notice: None,
        }
    }

    pub fn board(&self) -> &AssignmentBoard {
        &self.board
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(Colors::HEADER).inner_margin(Spacing::SM))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&self.config.window.title)
                            .strong()
                            .color(Colors::TEXT_ON_ACCENT),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(notice) = &self.notice {
                            ui.label(RichText::new(notice).small().color(Colors::TEXT_ON_ACCENT));
                        }
                    });
                });
            });
    }

    fn render_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default().show(ctx, |ui| {
            let action = self.board_view.show(ui, &self.board);
            self.handle_board_action(action);
        });
    }

    pub fn handle_board_action(&mut self, action: BoardAction) {
        match action {
            BoardAction::SetFilter(filter) => self.board.set_filter(filter),

            BoardAction::SetKind(kind) => self.board.set_submission_kind(kind),

            BoardAction::EditLink(text) => self.board.edit_link_text(text),

            BoardAction::PickFile => {
                if let Some(path) = pick_submission_file() {
                    self.load_submission_file(&path);
                }
            }

            BoardAction::Submit(id) => {
                // A rejected submit is already reflected in the board's banner.
                let _ = self.board.submit(id);
            }

            BoardAction::Download(id) => {
                let mut target = DialogTarget::new(self.config.download_dir());
                self.download_with(id, &mut target);
            }

            BoardAction::None => {}
        }
    }

    /// Read a picked file into the draft, reporting read failures in the header
    pub fn load_submission_file(&mut self, path: &Path) {
        match SubmittedFile::from_path(path) {
            Ok(file) => {
                self.notice = None;
                self.board.select_file(file);
            }
            Err(e) => {
                error!("{}", e);
                self.notice = Some(e.to_string());
            }
        }
    }

    pub fn download_with(&mut self, id: AssignmentId, target: &mut dyn SaveTarget) {
        match self.board.download(id, target) {
            Ok(Some(path)) => {
                info!(path = %path.display(), "Download complete");
                self.notice = Some(format!("Saved to {}", path.display()));
            }
            Ok(None) => {}
            Err(e) => {
                error!("{}", e);
                self.notice = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for AssignmentBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_header(ctx);
        self.render_content(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assignment_board_core::{DirectoryTarget, Filter, SubmissionKind};

    #[test]
    fn actions_drive_the_board() {
        let mut app = AssignmentBoardApp::with_config(AppConfig::default());

        app.handle_board_action(BoardAction::SetKind(SubmissionKind::Link));
        app.handle_board_action(BoardAction::Submit(2));
        assert_eq!(app.board().error_message(), Some("A link is required for submission."));

        app.handle_board_action(BoardAction::EditLink("http://x.com".to_string()));
        assert_eq!(app.board().error_message(), None);
        app.handle_board_action(BoardAction::Submit(2));
        app.handle_board_action(BoardAction::SetFilter(Filter::Completed));

        let ids: Vec<_> = app.board().visible_assignments().map(|a| a.id()).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn unreadable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = AssignmentBoardApp::with_config(AppConfig::default());

        app.load_submission_file(&dir.path().join("missing.html"));

        assert!(app.notice().unwrap().contains("missing.html"));
        assert!(app.board().draft().file().is_none());
    }

    #[test]
    fn picked_file_then_download() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.html");
        std::fs::write(&source, b"<p>done</p>").unwrap();
        let mut app = AssignmentBoardApp::with_config(AppConfig::default());

        app.load_submission_file(&source);
        app.handle_board_action(BoardAction::Submit(1));
        let mut target = DirectoryTarget::new(dir.path().join("out"));
        app.download_with(1, &mut target);

        assert_eq!(std::fs::read(dir.path().join("out").join("a.html")).unwrap(), b"<p>done</p>");
        assert!(app.notice().unwrap().starts_with("Saved to"));
    }
}
