// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assignment records and their submission payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::BoardError;

/// Identifier of an assignment, stable for the record's lifetime
pub type AssignmentId = u32;

/// A file handed in as a solution
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedFile {
    name: String,
    bytes: Vec<u8>,
}

impl SubmittedFile {
    /// Create a file payload from a display name and its contents
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file picked by the user; the display name is the last path component
    pub fn from_path(path: &Path) -> Result<Self, BoardError> {
        let bytes = std::fs::read(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "submission".to_string());

        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Payloads can be large; print the size instead of the bytes.
impl fmt::Debug for SubmittedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmittedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// What was handed in for an assignment. A file and a link never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// An uploaded file
    File(SubmittedFile),
    /// A URL pointing at the solution
    Link(String),
}

/// Grade attached to a submitted assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Sentinel set on submission when no grade exists yet
    NotGraded,
    /// A grade assigned elsewhere
    Value(String),
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::NotGraded => f.write_str("Not Graded"),
            Grade::Value(value) => f.write_str(value),
        }
    }
}

/// One coursework item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    id: AssignmentId,
    title: String,
    /// Display only, never enforced
    deadline: NaiveDate,
    submission: Option<Submission>,
    grade: Option<Grade>,
}

impl Assignment {
    /// Create a pending, ungraded assignment
    pub fn new(id: AssignmentId, title: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            deadline,
            submission: None,
            grade: None,
        }
    }

    pub fn id(&self) -> AssignmentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// True once a submission has been recorded
    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// The submitted file payload, if the solution was a file
    pub fn file(&self) -> Option<&SubmittedFile> {
        match &self.submission {
            Some(Submission::File(file)) => Some(file),
            _ => None,
        }
    }

    /// Display name of the submitted file
    pub fn file_name(&self) -> Option<&str> {
        self.file().map(SubmittedFile::name)
    }

    /// The submitted URL, if the solution was a link
    pub fn link(&self) -> Option<&str> {
        match &self.submission {
            Some(Submission::Link(url)) => Some(url),
            _ => None,
        }
    }

    pub fn grade(&self) -> Option<&Grade> {
        self.grade.as_ref()
    }

    /// `Submitted` or `Pending`
    pub fn status_label(&self) -> &'static str {
        if self.is_submitted() {
            "Submitted"
        } else {
            "Pending"
        }
    }

    /// Grade text for display, falling back to the sentinel
    pub fn grade_label(&self) -> String {
        self.grade
            .as_ref()
            .unwrap_or(&Grade::NotGraded)
            .to_string()
    }

    /// Record the payload and keep an existing grade, else set the sentinel.
    /// Callers guarantee the record is still pending.
    pub(crate) fn record_submission(&mut self, submission: Submission) {
        self.submission = Some(submission);
        if self.grade.is_none() {
            self.grade = Some(Grade::NotGraded);
        }
    }
}

const SEED: [(AssignmentId, &str, (i32, u32, u32)); 5] = [
    (1, "Assignment 1: HTML Basics", (2024, 8, 10)),
    (2, "Assignment 2: CSS Styling", (2024, 8, 15)),
    (3, "Assignment 3: JavaScript Functions", (2024, 8, 20)),
    (4, "Assignment 4: React Components", (2024, 8, 25)),
    (5, "Assignment 5: API Integration", (2024, 8, 30)),
];

/// The fixed list every board starts from
pub fn seed_assignments() -> Vec<Assignment> {
    SEED.iter()
        .map(|&(id, title, (year, month, day))| {
            // Seed dates are all valid calendar dates.
            let deadline = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);
            Assignment::new(id, title, deadline)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn seed_is_pending_and_ungraded() {
        let seed = seed_assignments();
        assert_eq!(seed.len(), 5);
        assert_eq!(
            seed.iter().map(Assignment::id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert!(seed.iter().all(|a| !a.is_submitted() && a.grade().is_none()));
        assert_eq!(seed[0].deadline().to_string(), "2024-08-10");
    }

    #[test]
    fn existing_grade_survives_submission() {
        let mut assignment = Assignment::new(9, "Essay", date(2024, 9, 1));
        assignment.grade = Some(Grade::Value("A-".to_string()));

        assignment.record_submission(Submission::Link("http://x.com".to_string()));

        assert_eq!(assignment.grade(), Some(&Grade::Value("A-".to_string())));
        assert_eq!(assignment.grade_label(), "A-");
    }

    #[test]
    fn file_name_tracks_file_payload() {
        let mut assignment = Assignment::new(1, "HTML", date(2024, 8, 10));
        assert_eq!(assignment.file_name(), None);
        assert_eq!(assignment.grade_label(), "Not Graded");

        assignment.record_submission(Submission::File(SubmittedFile::new("a.html", b"<p>".to_vec())));

        assert_eq!(assignment.file_name(), Some("a.html"));
        assert_eq!(assignment.link(), None);
        assert_eq!(assignment.status_label(), "Submitted");
    }

    #[test]
    fn debug_hides_payload_bytes() {
        let file = SubmittedFile::new("big.bin", vec![7u8; 4096]);
        let rendered = format!("{:?}", file);
        assert!(rendered.contains("len: 4096"));
        assert!(!rendered.contains("7, 7"));
    }

    #[test]
    fn from_path_reads_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, b"<html></html>").unwrap();

        let file = SubmittedFile::from_path(&path).unwrap();
        assert_eq!(file.name(), "index.html");
        assert_eq!(file.bytes(), b"<html></html>");

        let missing = SubmittedFile::from_path(&dir.path().join("nope.txt"));
        assert!(matches!(missing, Err(BoardError::Io { .. })));
    }
}
