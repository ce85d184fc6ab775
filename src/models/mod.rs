//! Data models for transcript import.
//!
//! - [`CourseRecord`] - One parsed transcript row (transient, consumed once by ingestion)
//! - [`PrefixStat`] / [`MajorResolution`] - Per-import major disambiguation artifacts
//! - [`Category`] / [`Semester`] / [`Course`] - The planner axes owned by a
//!   [`CourseStore`](crate::store::CourseStore)
//!
//! All models derive serde traits so the dry-run `parse` command can print records and the
//! planner snapshot can be persisted as JSON.

pub mod course;
pub mod major;
pub mod planner;

pub use course::CourseRecord;
pub use major::{MajorChoice, MajorResolution, MajorType, PrefixStat};
pub use planner::{Category, CategoryId, Course, CourseFields, CourseId, Semester, SemesterId};
