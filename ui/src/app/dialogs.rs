//! Native file dialogs for picking and saving submissions

use assignment_board_core::{DownloadHandle, SaveTarget};
use std::path::PathBuf;

/// Pick the file to submit. `None` when the user cancels.
pub fn pick_submission_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select submission file")
        .pick_file()
}

/// Asks the user where to save, prefilled with the submitted file name
pub struct DialogTarget {
    start_dir: Option<PathBuf>,
}

impl DialogTarget {
    pub fn new(start_dir: Option<PathBuf>) -> Self {
        Self { start_dir }
    }
}

impl SaveTarget for DialogTarget {
    fn save(&mut self, handle: &DownloadHandle) -> std::io::Result<Option<PathBuf>> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save submission")
            .set_file_name(handle.file_name());
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        match dialog.save_file() {
            Some(dest) => {
                std::fs::copy(handle.path(), &dest)?;
                Ok(Some(dest))
            }
            None => Ok(None),
        }
    }
}
