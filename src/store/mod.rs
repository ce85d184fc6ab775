//! Course-grid store interface.
//!
//! The import pipeline never owns planner state; it drives a [`CourseStore`] through a narrow
//! mutation API. Every addition returns the store-generated id synchronously, so callers never
//! need to re-read state to discover what they just created.
//!
//! [`InMemoryStore`] is the bundled implementation used by the CLI and tests;
//! [`persistence`] saves and loads it as a JSON snapshot.

pub mod memory;
pub mod persistence;

use thiserror::Error;

use crate::models::{Category, CategoryId, CourseFields, CourseId, MajorType, Semester, SemesterId};

pub use memory::InMemoryStore;
pub use persistence::{PlannerSnapshot, load_snapshot, save_snapshot};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("semester not found: {0}")]
    SemesterNotFound(SemesterId),

    #[error("store rejected mutation: {0}")]
    Rejected(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Mutation and read API of the planner store
pub trait CourseStore {
    fn categories(&self) -> &[Category];

    fn semesters(&self) -> &[Semester];

    fn add_category(
        &mut self,
        name: &str,
        required_credits: f64,
        is_major: bool,
    ) -> StoreResult<CategoryId>;

    fn update_category(
        &mut self,
        id: &CategoryId,
        name: &str,
        required_credits: f64,
        is_major: bool,
        major_type: MajorType,
    ) -> StoreResult<()>;

    fn remove_category(&mut self, id: &CategoryId) -> StoreResult<()>;

    fn add_semester(&mut self, name: &str) -> StoreResult<SemesterId>;

    fn remove_semester(&mut self, id: &SemesterId) -> StoreResult<()>;

    /// Clear every course while keeping category and semester shells
    fn reset_all_courses(&mut self) -> StoreResult<()>;

    fn add_course(
        &mut self,
        category_id: &CategoryId,
        semester_id: &SemesterId,
        course: CourseFields,
    ) -> StoreResult<CourseId>;

    fn find_category(&self, name: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.name == name)
    }
}
