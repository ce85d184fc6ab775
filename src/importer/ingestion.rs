use std::thread;

use serde::Serialize;

use super::configurator::{is_seasonal_record, major_category_name};
use super::targets::IngestTargets;
use crate::config::{IngestConfig, Vocabulary};
use crate::majors::extract_code_prefix;
use crate::models::{CategoryId, CourseFields, CourseRecord, SemesterId};
use crate::store::CourseStore;

/// A record that did not make it into the store, and why
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestIssue {
    pub line_number: usize,
    pub course_name: String,
    pub reason: String,
}

/// Outcome of one ingestion run
///
/// Skips (unresolvable target) and failures (store rejected the write) are soft: they never
/// stop the records after them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestReport {
    pub ingested: usize,
    pub skipped: Vec<IngestIssue>,
    pub failed: Vec<IngestIssue>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

pub fn resolve_semester<'t>(
    record: &CourseRecord,
    targets: &'t IngestTargets,
    vocab: &Vocabulary,
) -> Option<&'t SemesterId> {
    if is_seasonal_record(record, vocab) {
        targets.seasonal.as_ref()
    } else {
        targets.semester_for(&vocab.semester_name(record.year.trim(), record.semester.trim()))
    }
}

/// Category lookup chain; the catch-all is always the last resort
pub fn resolve_category<'t>(
    record: &CourseRecord,
    targets: &'t IngestTargets,
    vocab: &Vocabulary,
) -> Option<&'t CategoryId> {
    let literal = record.category.trim();
    let prefix = extract_code_prefix(&record.course_code);

    if vocab.is_major_category(literal) && !prefix.is_empty() {
        targets
            .category_for(&major_category_name(&prefix, record))
            .or_else(|| targets.prefix_category(&prefix))
            .or(targets.catch_all.as_ref())
            .or_else(|| targets.category_for(literal))
    } else {
        targets.category_for(literal).or(targets.catch_all.as_ref())
    }
}

/// Remove parenthesized English-taught markers from a course name
///
/// Returns the cleaned name and whether any marker occurred in the original.
pub fn strip_english_markers(name: &str, vocab: &Vocabulary) -> (String, bool) {
    let is_english = vocab.has_english_marker(name);
    let mut cleaned = name.to_string();

    for marker in &vocab.english_markers {
        let token = format!("({})", marker);
        while let Some(start) = cleaned.find(&token) {
            let head = cleaned[..start].trim_end();
            let tail = &cleaned[start + token.len()..];
            cleaned = format!("{}{}", head, tail);
        }
    }

    (cleaned.trim().to_string(), is_english)
}

pub fn course_fields(record: &CourseRecord, vocab: &Vocabulary) -> CourseFields {
    let (name, is_english) = strip_english_markers(&record.course_name, vocab);
    let is_dropped = record.is_dropped();

    CourseFields {
        name,
        credits: if record.is_retake || is_dropped { 0.0 } else { record.credits },
        grade: record.letter_grade.clone(),
        gpa_value: (record.number_grade > 0.0).then_some(record.number_grade),
        is_retake: record.is_retake,
        is_dropped,
        is_english,
    }
}

/// Add each record to its resolved (category, semester) pair, in order
pub fn ingest_records<S: CourseStore + ?Sized>(
    store: &mut S,
    records: &[CourseRecord],
    targets: &IngestTargets,
    vocab: &Vocabulary,
    config: &IngestConfig,
) -> IngestReport {
    let mut report = IngestReport::default();
    let batch_size = config.effective_batch_size();
    let batch_count = records.len().div_ceil(batch_size);

    for (batch_index, batch) in records.chunks(batch_size).enumerate() {
        tracing::debug!(batch = batch_index + 1, of = batch_count, "Ingesting batch");

        for record in batch {
            let issue = |reason: String| IngestIssue {
                line_number: record.line_number,
                course_name: record.course_name.clone(),
                reason,
            };

            let Some(semester) = resolve_semester(record, targets, vocab) else {
                tracing::warn!(line = record.line_number, year = %record.year, semester = %record.semester, "No semester for record, skipping");
                report.skipped.push(issue(format!(
                    "no semester for {} {}",
                    record.year, record.semester
                )));
                continue;
            };
            let Some(category) = resolve_category(record, targets, vocab) else {
                tracing::warn!(line = record.line_number, category = %record.category, "No category for record, skipping");
                report.skipped.push(issue(format!("no category for '{}'", record.category)));
                continue;
            };

            match store.add_course(category, semester, course_fields(record, vocab)) {
                Ok(_) => {
                    tracing::debug!(line = record.line_number, category = %category, semester = %semester, "Added course");
                    report.ingested += 1;
                }
                Err(e) => {
                    tracing::warn!(line = record.line_number, error = %e, "Store rejected course");
                    report.failed.push(issue(e.to_string()));
                }
            }

            if !config.record_delay().is_zero() {
                thread::sleep(config.record_delay());
            }
        }

        if batch_index + 1 < batch_count && !config.batch_delay().is_zero() {
            thread::sleep(config.batch_delay());
        }
    }

    tracing::info!(
        ingested = report.ingested,
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "Ingestion finished"
    );
    report
}
