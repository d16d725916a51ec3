//! Headless validation of a draft file.

use std::path::Path;

use tracing::info;

use crate::model::{SubmittedApplication, ValidationErrors, submit};
use crate::storage::{StorageError, read_draft};

/// Result of running a draft file through submit.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// The draft passed; holds the snapshot.
    Accepted(SubmittedApplication),
    /// The draft failed; holds every failing field.
    Rejected(ValidationErrors),
}

impl CheckOutcome {
    /// Returns `true` if the draft passed validation.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Pretty JSON for stdout: the snapshot, or the `{field: message}` map.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Accepted(snapshot) => snapshot.to_json_pretty(),
            Self::Rejected(errors) => serde_json::to_string_pretty(errors),
        }
    }
}

/// Reads the draft at `path` and submits it.
pub fn check_draft(path: &Path) -> Result<CheckOutcome, StorageError> {
    let draft = read_draft(path)?;
    let outcome = match submit(&draft) {
        Ok(snapshot) => CheckOutcome::Accepted(snapshot),
        Err(errors) => CheckOutcome::Rejected(errors),
    };
    match &outcome {
        CheckOutcome::Accepted(_) => info!(path = %path.display(), "draft accepted"),
        CheckOutcome::Rejected(errors) => {
            info!(path = %path.display(), errors = errors.len(), "draft rejected");
        }
    }
    Ok(outcome)
}
