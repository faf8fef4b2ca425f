//! Quick Assignment Board Demo - headless walkthrough
//! Drives the board through a typical session and prints each state

use anyhow::Result;
use assignment_board_core::{
    AssignmentBoard, DirectoryTarget, Filter, SubmissionKind, SubmittedFile,
};

fn print_board(board: &AssignmentBoard) {
    println!("== {} ==", board.filter().heading());
    if let Some(message) = board.error_message() {
        println!("!! {}", message);
    }

    let mut shown = 0;
    for assignment in board.visible_assignments() {
        shown += 1;
        let detail = if assignment.is_submitted() {
            let payload = assignment
                .file_name()
                .or(assignment.link())
                .unwrap_or("Not Available");
            format!("grade: {}, {}", assignment.grade_label(), payload)
        } else {
            "awaiting submission".to_string()
        };
        println!(
            "  #{} {:<36} due {}  [{}] {}",
            assignment.id(),
            assignment.title(),
            assignment.deadline(),
            assignment.status_label(),
            detail
        );
    }
    if shown == 0 {
        println!("  {}", board.filter().empty_message());
    }
    println!();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let mut board = AssignmentBoard::seeded();
    print_board(&board);

    // Submitting before choosing anything only raises the banner
    let _ = board.submit(1);
    print_board(&board);

    board.select_file(SubmittedFile::new("a.html", b"<h1>HTML Basics</h1>".to_vec()));
    board.submit(1)?;

    board.set_submission_kind(SubmissionKind::Link);
    board.edit_link_text("http://x.com");
    board.submit(2)?;

    for filter in Filter::ALL {
        board.set_filter(filter);
        print_board(&board);
    }

    let out = tempfile::tempdir()?;
    let mut target = DirectoryTarget::new(out.path());
    if let Some(path) = board.download(1, &mut target)? {
        println!("Downloaded assignment 1 to {}", path.display());
    }
    if board.download(2, &mut target)?.is_none() {
        println!("Assignment 2 is a link; nothing to download");
    }

    Ok(())
}
