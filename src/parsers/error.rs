use std::fmt;

use thiserror::Error;

use crate::utils::terminal::display_row;

/// Why a single line could not be decomposed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineErrorKind {
    TooFewFields { found: usize, required: usize },
    /// Every strategy declined (or one rejected); `(strategy, reason)` pairs in trial order
    Unrecognized { reasons: Vec<(&'static str, String)> },
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields { found, required } => {
                write!(f, "too few fields ({} found, at least {} required)", found, required)
            }
            Self::Unrecognized { reasons } => {
                write!(f, "unrecognized row format")?;
                if let Some((strategy, reason)) = reasons.last() {
                    write!(f, " (last attempt {}: {})", strategy, reason)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line {line_number}: {kind} [{}]", display_row(.raw))]
pub struct LineParseError {
    pub line_number: usize,
    pub raw: String,
    pub kind: LineErrorKind,
}

/// Every line failure from one transcript, reported together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptParseError {
    pub errors: Vec<LineParseError>,
    pub total_lines: usize,
}

impl TranscriptParseError {
    pub fn line_numbers(&self) -> Vec<usize> {
        self.errors.iter().map(|e| e.line_number).collect()
    }
}

impl fmt::Display for TranscriptParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse {} of {} transcript lines:", self.errors.len(), self.total_lines)?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for TranscriptParseError {}
