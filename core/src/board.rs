// SPDX-License-Identifier: MIT OR Apache-2.0

//! The assignment board: collection, draft, filter and validation banner

use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::assignment::{seed_assignments, Assignment, AssignmentId, Submission, SubmittedFile};
use crate::download::{DownloadHandle, SaveTarget};
use crate::{BoardError, Filter, SubmissionKind};

/// Input not yet committed by a submit
#[derive(Debug, Clone, Default)]
pub struct Draft {
    file: Option<SubmittedFile>,
    link: String,
    kind: SubmissionKind,
}

impl Draft {
    pub fn file(&self) -> Option<&SubmittedFile> {
        self.file.as_ref()
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn kind(&self) -> SubmissionKind {
        self.kind
    }

    /// Whether the value the current kind requires is present
    pub fn is_ready(&self) -> bool {
        match self.kind {
            SubmissionKind::File => self.file.is_some(),
            SubmissionKind::Link => !self.link.is_empty(),
        }
    }

    /// Take the kind-appropriate value and clear both inputs.
    /// Returns `None` and leaves the draft alone if it is not ready.
    fn take_submission(&mut self) -> Option<Submission> {
        if !self.is_ready() {
            return None;
        }

        let submission = match self.kind {
            SubmissionKind::File => Submission::File(self.file.take()?),
            SubmissionKind::Link => Submission::Link(std::mem::take(&mut self.link)),
        };
        self.clear_inputs();

        Some(submission)
    }

    fn clear_inputs(&mut self) {
        self.file = None;
        self.link.clear();
    }
}

/// Result of a submit that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The assignment moved to the submitted state
    Submitted,
    /// No assignment has the requested id; nothing changed
    UnknownAssignment,
    /// The assignment was already submitted; nothing changed
    AlreadySubmitted,
}

/// In-memory state behind the dashboard view
#[derive(Debug, Clone)]
pub struct AssignmentBoard {
    assignments: Vec<Assignment>,
    draft: Draft,
    filter: Filter,
    error_message: Option<String>,
}

impl AssignmentBoard {
    /// Create a board over the given records
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            draft: Draft::default(),
            filter: Filter::default(),
            error_message: None,
        }
    }

    /// Create a board over the fixed seed list
    pub fn seeded() -> Self {
        Self::new(seed_assignments())
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignment(&self, id: AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id() == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn submission_kind(&self) -> SubmissionKind {
        self.draft.kind
    }

    /// Message for the validation banner, if the last submit failed
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.draft.is_ready()
    }

    /// Assignments passing the active filter, in collection order
    pub fn visible_assignments(&self) -> impl Iterator<Item = &Assignment> + '_ {
        let filter = self.filter;
        self.assignments.iter().filter(move |a| filter.matches(a))
    }

    /// Store a picked file as the draft file
    pub fn select_file(&mut self, file: SubmittedFile) {
        debug!(name = file.name(), len = file.len(), "Draft file selected");
        self.draft.file = Some(file);
        self.error_message = None;
    }

    /// Store typed text as the draft link
    pub fn edit_link_text(&mut self, text: impl Into<String>) {
        self.draft.link = text.into();
        self.error_message = None;
    }

    /// Switch between file and link input; drafts are kept
    pub fn set_submission_kind(&mut self, kind: SubmissionKind) {
        debug!(%kind, "Submission kind changed");
        self.draft.kind = kind;
    }

    pub fn set_filter(&mut self, filter: Filter) {
        debug!(%filter, "Filter changed");
        self.filter = filter;
    }

    /// Commit the draft to an assignment.
    ///
    /// Fails with [`BoardError::MissingSubmissionInput`] when the current kind's
    /// draft value is absent; the banner is set and nothing else changes.
    /// Submitting to an already submitted assignment leaves everything as is.
    pub fn submit(&mut self, id: AssignmentId) -> Result<SubmitOutcome, BoardError> {
        let kind = self.draft.kind;
        if !self.draft.is_ready() {
            let err = BoardError::MissingSubmissionInput(kind);
            warn!(assignment_id = id, %kind, "Submission rejected: {}", err);
            self.error_message = Some(err.to_string());
            return Err(err);
        }

        let index = match self.assignments.iter().position(|a| a.id() == id) {
            Some(index) => index,
            None => {
                warn!(assignment_id = id, "Submit for unknown assignment ignored");
                self.draft.clear_inputs();
                self.error_message = None;
                return Ok(SubmitOutcome::UnknownAssignment);
            }
        };

        if self.assignments[index].is_submitted() {
            warn!(assignment_id = id, "Assignment already submitted");
            return Ok(SubmitOutcome::AlreadySubmitted);
        }

        let submission = self
            .draft
            .take_submission()
            .ok_or(BoardError::MissingSubmissionInput(kind))?;
        self.assignments[index].record_submission(submission);
        self.error_message = None;

        info!(assignment_id = id, %kind, "Assignment submitted");
        Ok(SubmitOutcome::Submitted)
    }

    /// Save the submitted file of an assignment through `target`.
    ///
    /// The payload is staged in a transient copy that is released as soon as
    /// the target returns, whether or not saving succeeded. Returns `Ok(None)`
    /// when there is no file to save or the target declined.
    pub fn download(
        &self,
        id: AssignmentId,
        target: &mut dyn SaveTarget,
    ) -> Result<Option<PathBuf>, BoardError> {
        let file = match self.assignment(id).and_then(Assignment::file) {
            Some(file) => file,
            None => {
                debug!(assignment_id = id, "Nothing to download");
                return Ok(None);
            }
        };

        let handle = DownloadHandle::create(file)?;
        let saved = target.save(&handle);
        drop(handle);

        match saved {
            Ok(Some(path)) => {
                info!(assignment_id = id, path = %path.display(), "Submission saved");
                Ok(Some(path))
            }
            Ok(None) => {
                debug!(assignment_id = id, "Save declined");
                Ok(None)
            }
            Err(e) => {
                warn!(assignment_id = id, "Save failed: {}", e);
                Err(BoardError::Download(e))
            }
        }
    }
}

impl Default for AssignmentBoard {
    fn default() -> Self {
        Self::seeded()
    }
}
