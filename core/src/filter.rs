// SPDX-License-Identifier: MIT OR Apache-2.0

//! View filter over the assignment collection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Assignment, BoardError};

/// Which assignments the board shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Everything
    #[default]
    All,
    /// Not yet submitted
    Pending,
    /// Submitted
    Completed,
}

impl Filter {
    /// Every filter, in selector order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    /// Whether an assignment passes this filter
    pub fn matches(&self, assignment: &Assignment) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !assignment.is_submitted(),
            Filter::Completed => assignment.is_submitted(),
        }
    }

    /// Section heading, e.g. `Pending Assignments`
    pub fn heading(&self) -> String {
        format!("{} Assignments", self.label())
    }

    /// Placeholder when nothing passes, e.g. `No completed assignments.`
    pub fn empty_message(&self) -> String {
        format!("No {} assignments.", self.as_str())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| BoardError::UnknownFilter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        assert_eq!("pending".parse::<Filter>().unwrap(), Filter::Pending);
        assert_eq!(Filter::Completed.to_string(), "completed");
        assert!(matches!("graded".parse::<Filter>(), Err(BoardError::UnknownFilter(_))));
    }

    #[test]
    fn headings() {
        assert_eq!(Filter::All.heading(), "All Assignments");
        assert_eq!(Filter::Pending.empty_message(), "No pending assignments.");
    }
}
