use serde::Serialize;

use super::configurator::configure_axes;
use super::error::ImportError;
use super::ingestion::{IngestReport, ingest_records};
use super::targets::IngestTargets;
use crate::config::ImportConfig;
use crate::majors::{MajorSelector, analyze_major_code_prefixes, apply_resolution, resolve_majors};
use crate::models::{CourseRecord, MajorResolution};
use crate::parsers::{LineParser, parse_transcript};
use crate::store::CourseStore;
use crate::validation::validate_records;

/// What one import did to the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSummary {
    pub records: usize,
    pub semesters_created: usize,
    pub categories_created: usize,
    pub resolution: Option<MajorResolution>,
    pub categories_removed: usize,
    pub ingest: IngestReport,
}

impl ImportSummary {
    pub fn ingested(&self) -> usize {
        self.ingest.ingested
    }
}

/// Parse and validate without touching any store
pub fn parse_and_validate(
    text: &str,
    config: &ImportConfig,
) -> Result<Vec<CourseRecord>, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::EmptyTranscript);
    }

    let parser = LineParser::new(config.vocabulary.clone())?;
    let records = parse_transcript(text, &parser)?;
    if records.is_empty() {
        return Err(ImportError::NoRecords);
    }

    let report = validate_records(&records, &config.vocabulary);
    if !report.is_valid {
        return Err(ImportError::Validation(report));
    }

    Ok(records)
}

/// Run the full import against `store`
///
/// The major decision is taken before the first mutation, so a failure in parsing, validation
/// or selection leaves the store untouched. Once the axes are rebuilt there is no rollback.
pub fn import_transcript<S: CourseStore + ?Sized>(
    text: &str,
    store: &mut S,
    selector: &mut dyn MajorSelector,
    config: &ImportConfig,
) -> Result<ImportSummary, ImportError> {
    let records = parse_and_validate(text, config)?;
    import_records(&records, store, selector, config)
}

/// Import already validated records
///
/// Callers that need the records before the import (to show them in a prompt, say) parse with
/// [`parse_and_validate`] and hand the result here.
pub fn import_records<S: CourseStore + ?Sized>(
    records: &[CourseRecord],
    store: &mut S,
    selector: &mut dyn MajorSelector,
    config: &ImportConfig,
) -> Result<ImportSummary, ImportError> {
    let vocab = &config.vocabulary;
    tracing::info!(records = records.len(), "Importing transcript records");

    let stats = analyze_major_code_prefixes(records, vocab);
    let resolution = resolve_majors(&stats, selector)?;

    store.reset_all_courses()?;
    let layout = configure_axes(store, records, vocab)?;

    let marked = match &resolution {
        Some(resolution) => apply_resolution(store, resolution, vocab)?,
        None => Vec::new(),
    };

    let targets = IngestTargets::from_store(store, vocab);
    let ingest = ingest_records(store, records, &targets, vocab, &config.ingest);

    for id in &marked {
        store.remove_category(id)?;
    }
    if !marked.is_empty() {
        tracing::info!(removed = marked.len(), "Removed categories of unselected majors");
    }

    Ok(ImportSummary {
        records: records.len(),
        semesters_created: layout.semesters.len() + usize::from(layout.seasonal.is_some()),
        categories_created: layout.categories.len(),
        resolution,
        categories_removed: marked.len(),
        ingest,
    })
}
