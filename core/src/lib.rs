// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assignment Board Core - Coursework State and Submission Logic
//!
//! This crate provides the state behind the student dashboard:
//! - Assignment records and their submission payloads
//! - The board holding the collection, the draft and the active filter
//! - Submission validation and the pending → submitted transition
//! - Saving a submitted file through a scoped transient copy

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod assignment;
pub mod board;
pub mod download;
pub mod filter;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// How a solution is handed in (a file or a link)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    /// Upload a file
    #[default]
    File,
    /// Paste a URL
    Link,
}

impl SubmissionKind {
    /// Every kind, in selector order
    pub const ALL: [SubmissionKind; 2] = [SubmissionKind::File, SubmissionKind::Link];

    /// Lowercase value used in config and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::File => "file",
            SubmissionKind::Link => "link",
        }
    }

    /// Label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionKind::File => "File",
            SubmissionKind::Link => "Link",
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(SubmissionKind::File),
            "link" => Ok(SubmissionKind::Link),
            other => Err(BoardError::UnknownSubmissionKind(other.to_string())),
        }
    }
}

/// Errors raised by the board and its environment edges
#[derive(Debug, Error)]
pub enum BoardError {
    /// The draft value required by the chosen kind is absent
    #[error("{}", missing_input_message(.0))]
    MissingSubmissionInput(SubmissionKind),

    /// Filter value outside `all|pending|completed`
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Submission kind outside `file|link`
    #[error("Unknown submission kind: {0}")]
    UnknownSubmissionKind(String),

    /// Reading a picked file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// The file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Creating the transient copy or saving it failed
    #[error("Download failed: {0}")]
    Download(#[source] std::io::Error),
}

fn missing_input_message(kind: &SubmissionKind) -> &'static str {
    match kind {
        SubmissionKind::File => "A file is required for submission.",
        SubmissionKind::Link => "A link is required for submission.",
    }
}

pub use assignment::{seed_assignments, Assignment, AssignmentId, Grade, Submission, SubmittedFile};
pub use board::{AssignmentBoard, Draft, SubmitOutcome};
pub use download::{DirectoryTarget, DownloadHandle, SaveTarget};
pub use filter::Filter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_messages() {
        assert_eq!(
            BoardError::MissingSubmissionInput(SubmissionKind::File).to_string(),
            "A file is required for submission."
        );
        assert_eq!(
            BoardError::MissingSubmissionInput(SubmissionKind::Link).to_string(),
            "A link is required for submission."
        );
    }

    #[test]
    fn kind_parses_its_own_values() {
        for kind in SubmissionKind::ALL {
            assert_eq!(kind.as_str().parse::<SubmissionKind>().unwrap(), kind);
        }
        assert!(matches!(
            "zip".parse::<SubmissionKind>(),
            Err(BoardError::UnknownSubmissionKind(v)) if v == "zip"
        ));
    }
}
