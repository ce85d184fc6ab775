//! Transcript parsing: pasted text to [`CourseRecord`](crate::models::CourseRecord)s
//!
//! # Error Handling Strategy
//!
//! Parsing is **exhaustive, then strict**:
//!
//! - **Per-line strategies**: each line runs through an ordered chain of pure strategy functions
//!   (see [`strategies`]). A strategy either parses the line, declines it so the next one can
//!   try, or rejects it outright. Reasons from every attempt are kept on the line's error.
//!
//! - **No silent drops**: a line that no strategy accepts becomes a [`LineParseError`] carrying
//!   its line number and raw text. Header rows are the one exception and are skipped.
//!
//! - **Aggregated failure**: [`parse_transcript`] attempts every line and, if any failed,
//!   returns a single [`TranscriptParseError`] listing all of them so the user can fix the
//!   paste in one pass.

pub mod error;
pub mod grammar;
pub mod line;
pub mod strategies;
pub mod tokens;
pub mod transcript;

pub use error::{LineErrorKind, LineParseError, TranscriptParseError};
pub use grammar::Grammar;
pub use line::{LineParser, MIN_FIELDS};
pub use strategies::StrategyOutcome;
pub use tokens::normalize_grade;
pub use transcript::parse_transcript;
