// SPDX-License-Identifier: MIT OR Apache-2.0

use assignment_board_core::*;
use std::io;
use std::path::PathBuf;

/// Records where the staged copy lived, then behaves as configured
struct RecordingTarget {
    staged: Vec<PathBuf>,
    fail: bool,
}

impl RecordingTarget {
    fn new(fail: bool) -> Self {
        Self {
            staged: Vec::new(),
            fail,
        }
    }
}

impl SaveTarget for RecordingTarget {
    fn save(&mut self, handle: &DownloadHandle) -> io::Result<Option<PathBuf>> {
        self.staged.push(handle.path().to_path_buf());
        assert!(handle.path().exists());
        if self.fail {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        } else {
            Ok(None)
        }
    }
}

fn board_with_file() -> AssignmentBoard {
    let mut board = AssignmentBoard::seeded();
    board.select_file(SubmittedFile::new("a.html", b"<h1>hi</h1>".to_vec()));
    board.submit(1).unwrap();
    board
}

#[test]
fn download_saves_payload_under_its_name() {
    let dir = tempfile::tempdir().unwrap();
    let board = board_with_file();
    let mut target = DirectoryTarget::new(dir.path());

    let saved = board.download(1, &mut target).unwrap();

    let path = saved.expect("file submission should be saved");
    assert_eq!(path, dir.path().join("a.html"));
    assert_eq!(std::fs::read(path).unwrap(), b"<h1>hi</h1>");
}

#[test]
fn transient_copy_is_released_after_save() {
    let board = board_with_file();
    let mut target = RecordingTarget::new(false);

    assert_eq!(board.download(1, &mut target).unwrap(), None);

    assert_eq!(target.staged.len(), 1);
    assert!(!target.staged[0].exists());
}

#[test]
fn transient_copy_is_released_after_failed_save() {
    let board = board_with_file();
    let mut target = RecordingTarget::new(true);

    let result = board.download(1, &mut target);

    assert!(matches!(result, Err(BoardError::Download(_))));
    assert!(!target.staged[0].exists());
}

#[test]
fn download_without_file_is_noop() {
    let mut board = AssignmentBoard::seeded();
    board.set_submission_kind(SubmissionKind::Link);
    board.edit_link_text("http://x.com");
    board.submit(2).unwrap();
    let mut target = RecordingTarget::new(false);

    // Link submission, pending assignment, unknown id
    for id in [2, 3, 99] {
        assert_eq!(board.download(id, &mut target).unwrap(), None);
    }
    assert!(target.staged.is_empty());
}
