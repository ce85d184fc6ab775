use super::error::{LineErrorKind, LineParseError};
use super::grammar::Grammar;
use super::strategies::{STRATEGIES, StrategyOutcome};
use super::tokens::{LineInput, normalize_grade};
use crate::config::Vocabulary;
use crate::models::CourseRecord;

/// Minimum whitespace-separated tokens in a course row
pub const MIN_FIELDS: usize = 8;

/// Parses single transcript lines with a compiled [`Grammar`]
#[derive(Debug, Clone)]
pub struct LineParser {
    grammar: Grammar,
}

impl LineParser {
    pub fn new(vocab: Vocabulary) -> Result<Self, regex::Error> {
        Ok(Self { grammar: Grammar::new(vocab)? })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.grammar.vocab
    }

    /// Decompose one line into a record
    ///
    /// Returns `Ok(None)` for header rows. Blank lines are the caller's concern.
    pub fn parse_line(
        &self,
        line_number: usize,
        line: &str,
    ) -> Result<Option<CourseRecord>, LineParseError> {
        let input = LineInput::new(line_number, line);
        let error = |kind| LineParseError { line_number, raw: input.raw.to_string(), kind };

        if input.tokens.first().is_some_and(|t| self.grammar.vocab.is_header_marker(t)) {
            tracing::debug!(line = line_number, "Skipping header row");
            return Ok(None);
        }

        if input.tokens.len() < MIN_FIELDS {
            return Err(error(LineErrorKind::TooFewFields {
                found: input.tokens.len(),
                required: MIN_FIELDS,
            }));
        }

        let mut reasons = Vec::new();
        for (name, strategy) in STRATEGIES {
            match strategy(&input, &self.grammar) {
                StrategyOutcome::Parsed(mut record) => {
                    tracing::debug!(line = line_number, strategy = name, "Parsed transcript line");
                    record.letter_grade = normalize_grade(&record.letter_grade);
                    return Ok(Some(record));
                }
                StrategyOutcome::Declined(reason) => reasons.push((*name, reason)),
                StrategyOutcome::Rejected(reason) => {
                    reasons.push((*name, reason));
                    break;
                }
            }
        }

        Err(error(LineErrorKind::Unrecognized { reasons }))
    }
}
