use std::collections::HashMap;

use crate::config::Vocabulary;
use crate::models::{CategoryId, SemesterId};
use crate::store::CourseStore;

/// Immutable lookup tables for routing records to (category, semester) pairs
///
/// Built once from the store after major tagging, then only read during ingestion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestTargets {
    /// Semester id by display name
    pub semesters: HashMap<String, SemesterId>,
    pub seasonal: Option<SemesterId>,
    /// Category id by name; categories marked for removal are excluded
    pub categories: HashMap<String, CategoryId>,
    /// Fallback category per major prefix; "other" prefixes point at the catch-all
    pub prefixes: HashMap<String, CategoryId>,
    pub catch_all: Option<CategoryId>,
}

impl IngestTargets {
    pub fn from_store<S: CourseStore + ?Sized>(store: &S, vocab: &Vocabulary) -> Self {
        let mut targets = Self::default();

        for semester in store.semesters() {
            if semester.name == vocab.seasonal_semester_name
                || semester.name == vocab.merged_seasonal_semester_name
            {
                targets.seasonal.get_or_insert_with(|| semester.id.clone());
            } else {
                targets.semesters.entry(semester.name.clone()).or_insert_with(|| semester.id.clone());
            }
        }

        targets.catch_all = store.find_category(&vocab.general_elective).map(|c| c.id.clone());

        let mut removed_prefixes = Vec::new();
        for category in store.categories() {
            if vocab.is_marked_for_removal(&category.name) {
                let original = &category.name[vocab.removal_marker.len()..];
                if let Some((prefix, _)) = original.split_once(' ') {
                    removed_prefixes.push(prefix.to_string());
                }
                continue;
            }

            targets.categories.entry(category.name.clone()).or_insert_with(|| category.id.clone());
            if category.is_major {
                if let Some((prefix, _)) = category.name.split_once(' ') {
                    targets.prefixes.entry(prefix.to_string()).or_insert_with(|| category.id.clone());
                }
            }
        }

        if let Some(catch_all) = &targets.catch_all {
            for prefix in removed_prefixes {
                targets.prefixes.entry(prefix).or_insert_with(|| catch_all.clone());
            }
        }

        targets
    }

    pub fn semester_for(&self, name: &str) -> Option<&SemesterId> {
        self.semesters.get(name)
    }

    pub fn category_for(&self, name: &str) -> Option<&CategoryId> {
        self.categories.get(name)
    }

    pub fn prefix_category(&self, prefix: &str) -> Option<&CategoryId> {
        self.prefixes.get(prefix)
    }
}
