//! Editor/host abstraction
//!
//! The advisor never talks to an editor directly. A host supplies document
//! text through [`TextSource`] and receives instructions through
//! [`AdvicePresenter`]: insert a template at a host-chosen location, or show
//! a message. [`advise`] drives one full advisory pass over one document.

use crate::advisor::{AnalysisResult, NestedLoopAdvisor};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Title used for informational messages
pub const ADVISOR_TITLE: &str = "Loopwise Advisor";

/// Title used for error messages
pub const ERROR_TITLE: &str = "Error";

/// Message shown when a template was inserted
pub const MSG_INSERTED: &str =
    "Nested loops detected. OpenMP template inserted into the document.";

/// Message shown when a nested loop was found but no template is registered
pub const MSG_NO_TEMPLATE: &str =
    "Nested loops detected. No template available for the configured strategy.";

/// Message shown when no nested loops were found
pub const MSG_NOT_FOUND: &str = "No nested loops found. No optimization required.";

/// Message shown when the document text is unavailable
pub const MSG_NO_DOCUMENT: &str =
    "Could not open the active document. Make sure a file is open.";

/// Supplies the current full text of a document
///
/// `Ok(None)` models "no active document": a distinct outcome the caller
/// reports as an error message, not a failure of the source itself.
pub trait TextSource {
    fn current_text(&self) -> Result<Option<String>>;
}

/// Receives the advisor's instructions for one document
pub trait AdvicePresenter {
    /// Insert the template at an implementation-defined location
    fn insert_template(&mut self, template: &str) -> Result<()>;

    /// Display an informational message
    fn show_message(&self, title: &str, body: &str);

    /// Display an error message
    fn show_error(&self, title: &str, body: &str);
}

/// How one advisory pass concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceOutcome {
    /// No document text was available
    NoDocument,
    /// A nested loop was found and the template presented
    Suggested,
    /// No nested loop was found
    NothingToSuggest,
}

/// Run one advisory pass: fetch text, analyze, present the result
pub fn advise<S, P>(
    advisor: &NestedLoopAdvisor,
    source: &S,
    presenter: &mut P,
) -> Result<AdviceOutcome>
where
    S: TextSource,
    P: AdvicePresenter,
{
    let Some(text) = source.current_text()? else {
        presenter.show_error(ERROR_TITLE, MSG_NO_DOCUMENT);
        return Ok(AdviceOutcome::NoDocument);
    };

    match advisor.analyze(&text) {
        AnalysisResult::NestedLoopFound { template } => {
            if template.is_empty() {
                presenter.show_message(ADVISOR_TITLE, MSG_NO_TEMPLATE);
            } else {
                presenter.insert_template(&template)?;
                presenter.show_message(ADVISOR_TITLE, MSG_INSERTED);
            }
            Ok(AdviceOutcome::Suggested)
        }
        AnalysisResult::NoNestedLoopFound => {
            presenter.show_message(ADVISOR_TITLE, MSG_NOT_FOUND);
            Ok(AdviceOutcome::NothingToSuggest)
        }
    }
}

/// A document backed by a file on disk
pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TextSource for FileDocument {
    fn current_text(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read file: {}", self.path.display()))?;
        Ok(Some(text))
    }
}
