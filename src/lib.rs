//! Transcript Importer - Turn a pasted academic transcript into a course planner
//!
//! This library parses semi-structured transcript text (tab- or space-delimited rows copied
//! from a university portal) and loads it into a planner store. It supports:
//!
//! - Parsing rows with an ordered chain of fallback strategies and aggregated line errors
//! - Validating every record before the planner is touched
//! - Detecting major course-code prefixes and resolving primary/secondary majors
//! - Rebuilding the semester and category axes and ingesting courses in throttled batches
//! - Persisting the planner as a JSON snapshot and summarizing credits and GPA
//!
//! # Example
//!
//! ```
//! use transcript_importer::{ImportConfig, InMemoryStore, PresetSelector, import_transcript};
//!
//! let transcript = "2020\t1\tCOMP101\t자료구조\t전공\t\t3\t95\tA+\t4.5\n\
//!                   2020\t여름계절\tGEKS001\t봉사활동\t교양\t\t2\t100\tP\t0";
//!
//! let mut store = InMemoryStore::new();
//! let mut selector = PresetSelector::accept_defaults();
//! let summary =
//!     import_transcript(transcript, &mut store, &mut selector, &ImportConfig::default())?;
//! assert_eq!(summary.ingested(), 2);
//! # Ok::<(), transcript_importer::ImportError>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod importer;
pub mod majors;
pub mod models;
pub mod parsers;
pub mod store;
pub mod summary;
pub mod telemetry;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::{ImportConfig, IngestConfig, Vocabulary};
pub use importer::{
    ImportError, ImportSummary, import_records, import_transcript, parse_and_validate,
};
pub use majors::{MajorSelector, PresetSelector};
pub use models::{CourseRecord, MajorResolution};
pub use parsers::{LineParser, parse_transcript};
pub use store::{CourseStore, InMemoryStore};
