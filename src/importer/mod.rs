//! Import pipeline: configure the planner axes and feed parsed records into a store
//!
//! # Error Handling Strategy
//!
//! - **Before mutation, strict**: parse errors, validation failures and invalid major choices
//!   abort the import as an [`ImportError`] with the store untouched.
//!
//! - **During ingestion, soft**: a record whose semester or category cannot be resolved, or
//!   that the store rejects, is logged and recorded in the [`IngestReport`]; the next record
//!   proceeds regardless.
//!
//! - **User feedback**: [`ImportError::user_message`] renders one consolidated report, and a
//!   successful [`ImportSummary`] carries the exact number of ingested courses.

pub mod configurator;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod targets;

pub use configurator::{AxisLayout, configure_axes};
pub use error::ImportError;
pub use ingestion::{IngestIssue, IngestReport, ingest_records};
pub use pipeline::{ImportSummary, import_records, import_transcript, parse_and_validate};
pub use targets::IngestTargets;
