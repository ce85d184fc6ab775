use thiserror::Error;

use crate::majors::ResolutionError;
use crate::parsers::TranscriptParseError;
use crate::store::StoreError;
use crate::validation::ValidationReport;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("transcript is empty")]
    EmptyTranscript,

    #[error("transcript contains no course rows")]
    NoRecords,

    #[error("invalid vocabulary pattern: {0}")]
    Grammar(#[from] regex::Error),

    #[error("{0}")]
    Parse(#[from] TranscriptParseError),

    #[error("{0}")]
    Validation(ValidationReport),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("planner store error: {0}")]
    Store(#[from] StoreError),
}

impl ImportError {
    /// Report for the person who pasted the transcript
    ///
    /// Parse and validation failures list every offending line with guidance on the expected
    /// layout; anything else gets a short generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyTranscript => {
                "Nothing to import: paste the transcript table (one course per line).".to_string()
            }
            Self::NoRecords => {
                "No course rows were found. Copy the course table itself, not only its header."
                    .to_string()
            }
            Self::Parse(error) => format!(
                "{}\n\nEach line should read: year, semester, course code, course name, category, \
                 [subcategory], credits, score, grade, grade points. Copy the table straight from \
                 the transcript page so the columns stay tab-separated.",
                error
            ),
            Self::Validation(report) => format!(
                "Import blocked, nothing was changed. Fix these lines and try again:\n{}",
                report
            ),
            Self::Resolution(error) => format!("Major selection failed: {}", error),
            Self::Grammar(_) | Self::Store(_) => {
                format!("Import failed unexpectedly: {}", self)
            }
        }
    }
}
