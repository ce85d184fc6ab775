//! Major detection and disambiguation
//!
//! Course-code prefixes stand in for departments. [`prefix`] counts them across major-category
//! records; [`resolution`] turns the counts into a primary/secondary/other decision, asking a
//! [`MajorSelector`] when more than zero prefixes exist, and tags the store's categories.

pub mod prefix;
pub mod resolution;

pub use prefix::{analyze_major_code_prefixes, extract_code_prefix, group_courses_by_prefix};
pub use resolution::{
    MajorSelector, PresetSelector, ResolutionError, apply_resolution, resolve_majors,
};
