use super::error::TranscriptParseError;
use super::line::LineParser;
use crate::models::CourseRecord;

/// Parse a pasted transcript block
///
/// Every line is attempted. Line numbers are 1-based over the raw text with blank lines
/// counted, so they match what the user sees in their editor. If any line fails, all failures
/// are returned together and no records are.
pub fn parse_transcript(
    text: &str,
    parser: &LineParser,
) -> Result<Vec<CourseRecord>, TranscriptParseError> {
    let mut records = Vec::new();
    let mut errors = Vec::new();
    let mut total_lines = 0;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        total_lines += 1;

        match parser.parse_line(index + 1, line) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(line = e.line_number, error = %e.kind, "Failed to parse transcript line");
                errors.push(e);
            }
        }
    }

    if !errors.is_empty() {
        return Err(TranscriptParseError { errors, total_lines });
    }

    tracing::info!(records = records.len(), lines = total_lines, "Parsed transcript");
    Ok(records)
}
