//! Record integrity checks run before any store mutation
//!
//! Validation fails closed: a single invalid record blocks the whole import. Every rule is a
//! row in [`RULES`]; each row names the field it checks and returns a message when the record
//! violates it.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::config::Vocabulary;
use crate::models::CourseRecord;

/// One field-level problem on one line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub line_number: usize,
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {} {}", self.line_number, self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn line_numbers(&self) -> Vec<usize> {
        let lines: BTreeSet<usize> = self.errors.iter().map(|e| e.line_number).collect();
        lines.into_iter().collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

type Rule = fn(&CourseRecord) -> Option<String>;

fn required(value: &str) -> Option<String> {
    value.trim().is_empty().then(|| "is missing".to_string())
}

const RULES: &[(&str, Rule)] = &[
    ("year", |r| required(&r.year)),
    ("semester", |r| required(&r.semester)),
    ("course_code", |r| required(&r.course_code)),
    ("course_name", |r| required(&r.course_name)),
    ("category", |r| required(&r.category)),
    ("credits", |r| {
        (!(r.credits > 0.0)).then(|| format!("must be greater than 0 (found {})", r.credits))
    }),
    ("score", |r| match r.score {
        None => Some("is missing".to_string()),
        Some(score) if score < 0.0 => Some(format!("must not be negative (found {})", score)),
        Some(_) => None,
    }),
    ("letter_grade", |r| required(&r.letter_grade)),
];

/// Check every record against every rule
pub fn validate_records(records: &[CourseRecord], vocab: &Vocabulary) -> ValidationReport {
    let errors: Vec<ValidationError> = records
        .iter()
        .flat_map(|record| {
            RULES.iter().filter_map(move |&(field, rule)| {
                rule(record).map(|message| ValidationError {
                    line_number: record.line_number,
                    field,
                    message,
                })
            })
        })
        .collect();

    let categories: BTreeSet<&str> = records.iter().map(|r| r.category.as_str()).collect();
    let major_records = records.iter().filter(|r| vocab.is_major_category(&r.category)).count();
    tracing::debug!(
        records = records.len(),
        categories = ?categories,
        major_records,
        errors = errors.len(),
        "Validated transcript records"
    );

    ValidationReport { is_valid: errors.is_empty(), errors }
}
