//! Headless rendering of the board view

use assignment_board_core::{AssignmentBoard, Filter, SubmissionKind, SubmittedFile};
use assignment_board_ui::features::{BoardAction, BoardView};

/// Run one frame of the view without a window and return its action
fn render(view: &mut BoardView, board: &AssignmentBoard) -> BoardAction {
    let ctx = egui::Context::default();
    let mut action = BoardAction::None;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            action = view.show(ui, board);
        });
    });
    action
}

#[test]
fn fresh_board_renders_without_action() {
    let mut view = BoardView::new("Web and App Development");
    let board = AssignmentBoard::seeded();

    assert_eq!(render(&mut view, &board), BoardAction::None);
}

#[test]
fn every_board_state_renders() {
    let mut view = BoardView::new("Web and App Development");
    let mut board = AssignmentBoard::seeded();

    // Banner visible
    let _ = board.submit(1);
    assert_eq!(render(&mut view, &board), BoardAction::None);

    // Mixed file and link submissions, link input showing
    board.select_file(SubmittedFile::new("a.html", b"x".to_vec()));
    board.submit(1).unwrap();
    board.set_submission_kind(SubmissionKind::Link);
    board.edit_link_text("http://x.com");
    board.submit(2).unwrap();
    assert_eq!(render(&mut view, &board), BoardAction::None);

    for filter in Filter::ALL {
        board.set_filter(filter);
        assert_eq!(render(&mut view, &board), BoardAction::None);
    }
}

#[test]
fn empty_filter_renders_placeholder() {
    let mut view = BoardView::new("Web and App Development");
    let mut board = AssignmentBoard::seeded();
    board.set_filter(Filter::Completed);

    assert_eq!(board.visible_assignments().count(), 0);
    assert_eq!(render(&mut view, &board), BoardAction::None);
}
