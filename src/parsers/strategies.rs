//! Row decomposition strategies.
//!
//! Each strategy is a pure function from a tokenized line to a [`StrategyOutcome`]. The line
//! parser tries them in [`STRATEGIES`] order: the first `Parsed` wins, a `Rejected` ends the
//! chain, and `Declined` hands the line to the next strategy.

use regex::Captures;

use super::grammar::Grammar;
use super::tokens::{Delimiter, LineInput, is_decimal, is_grade_shaped, is_pure_script, parse_decimal};
use crate::models::CourseRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum StrategyOutcome {
    Parsed(CourseRecord),
    /// Not this strategy's shape; try the next one
    Declined(String),
    /// This strategy owns the line but it is malformed; stop trying
    Rejected(String),
}

pub type Strategy = fn(&LineInput<'_>, &Grammar) -> StrategyOutcome;

pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("military-sentinel", military_sentinel),
    ("tab-pattern", tab_pattern),
    ("whitespace-pattern", whitespace_pattern),
    ("positional", positional),
    ("tab-cells", tab_cells),
];

fn declined(reason: &str) -> StrategyOutcome {
    StrategyOutcome::Declined(reason.to_string())
}

/// Off-curriculum credit row: `<sentinel> code name category [subcategory] credits score grade points`
pub fn military_sentinel(input: &LineInput<'_>, grammar: &Grammar) -> StrategyOutcome {
    let vocab = &grammar.vocab;
    let fields = input.fields();

    match fields.first() {
        Some(first) if vocab.is_military_year(first) => {}
        _ => return declined("first token is not the military-service sentinel"),
    }

    let field = |i: usize| fields.get(i).copied().unwrap_or_default().to_string();
    let (subcategory, scan_from) = match fields.get(4) {
        Some(token) if is_decimal(token) => (String::new(), 4),
        Some(token) => (token.to_string(), 5),
        None => (String::new(), 5),
    };

    let mut credits = None;
    let mut score = None;
    let mut letter_grade: Option<&str> = None;
    let mut number_grade = None;

    for &token in fields.iter().skip(scan_from) {
        if is_decimal(token) {
            if letter_grade.is_some() {
                number_grade = parse_decimal(token);
                break;
            } else if credits.is_none() {
                credits = parse_decimal(token);
            } else if score.is_none() {
                score = parse_decimal(token);
            }
        } else if letter_grade.is_none() && is_grade_shaped(token, vocab) {
            letter_grade = Some(token);
        }
    }

    let (Some(credits), Some(letter_grade)) = (credits, letter_grade) else {
        return StrategyOutcome::Rejected(
            "military-service row is missing credits or a letter grade".to_string(),
        );
    };

    let is_retake = fields.last().is_some_and(|t| vocab.is_retake_marker(t));

    StrategyOutcome::Parsed(CourseRecord {
        line_number: input.line_number,
        year: vocab.military_sentinel.clone(),
        semester: vocab.seasonal_marker.clone(),
        course_code: field(1),
        course_name: field(2),
        category: field(3),
        subcategory,
        credits,
        score,
        letter_grade: letter_grade.to_string(),
        number_grade: number_grade.unwrap_or(0.0),
        is_retake,
    })
}

/// Full-row regex over tab-separated cells
pub fn tab_pattern(input: &LineInput<'_>, grammar: &Grammar) -> StrategyOutcome {
    if input.delimiter != Delimiter::Tab {
        return declined("line is not tab-delimited");
    }
    match grammar.tab_pattern.captures(input.raw) {
        Some(caps) => record_from_captures(input, grammar, &caps),
        None => declined("tab pattern did not match"),
    }
}

/// Full-row regex over whitespace-separated tokens
pub fn whitespace_pattern(input: &LineInput<'_>, grammar: &Grammar) -> StrategyOutcome {
    match grammar.whitespace_pattern.captures(input.raw) {
        Some(caps) => record_from_captures(input, grammar, &caps),
        None => declined("whitespace pattern did not match"),
    }
}

fn record_from_captures(
    input: &LineInput<'_>,
    grammar: &Grammar,
    caps: &Captures<'_>,
) -> StrategyOutcome {
    let text = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or_default();
    let number = |i: usize| text(i).trim().parse::<f64>().ok();

    let (Some(credits), Some(score), Some(number_grade)) = (number(7), number(8), number(10))
    else {
        return declined("numeric columns did not parse");
    };

    StrategyOutcome::Parsed(CourseRecord {
        line_number: input.line_number,
        year: text(1).trim().to_string(),
        semester: text(2).trim().to_string(),
        course_code: text(3).trim().to_string(),
        course_name: collapse_whitespace(text(4)),
        category: text(5).trim().to_string(),
        subcategory: collapse_whitespace(text(6)),
        credits,
        score: Some(score),
        letter_grade: text(9).to_string(),
        number_grade,
        is_retake: grammar.vocab.contains_retake_marker(input.raw),
    })
}

/// Index of the category column: a known marker first, then any pure-script token
///
/// The search starts after the first course-name column so the name is never empty.
fn locate_category(columns: &[&str], grammar: &Grammar) -> Option<usize> {
    (4..columns.len())
        .find(|&i| grammar.vocab.is_category_marker(columns[i]))
        .or_else(|| (4..columns.len()).find(|&i| is_pure_script(columns[i])))
}

/// Category search followed by a backward scan for the four trailing grade columns
pub fn positional(input: &LineInput<'_>, grammar: &Grammar) -> StrategyOutcome {
    let vocab = &grammar.vocab;
    let fields = input.fields();
    if fields.len() < 8 {
        return declined("too few columns for positional parsing");
    }

    let Some(category_index) = locate_category(&fields, grammar) else {
        return declined("no category token found");
    };

    // Slots in scan order: grade points, letter grade, score, credits
    let mut slots = [0usize; 4];
    let mut filled = 0;
    for i in (category_index + 1..fields.len()).rev() {
        let token = fields[i];
        let fits = match filled {
            1 => is_grade_shaped(token, vocab),
            _ => is_decimal(token),
        };
        if fits {
            slots[filled] = i;
            filled += 1;
            if filled == slots.len() {
                break;
            }
        }
    }
    if filled < slots.len() {
        return declined("could not locate credits, score, grade and grade points");
    }
    let [number_grade_index, grade_index, score_index, credits_index] = slots;

    let (Some(credits), Some(score), Some(number_grade)) = (
        parse_decimal(fields[credits_index]),
        parse_decimal(fields[score_index]),
        parse_decimal(fields[number_grade_index]),
    ) else {
        return declined("numeric columns did not parse");
    };

    StrategyOutcome::Parsed(CourseRecord {
        line_number: input.line_number,
        year: fields[0].to_string(),
        semester: fields[1].to_string(),
        course_code: fields[2].to_string(),
        course_name: fields[3..category_index].join(" "),
        category: fields[category_index].to_string(),
        subcategory: fields[category_index + 1..credits_index].join(" "),
        credits,
        score: Some(score),
        letter_grade: fields[grade_index].to_string(),
        number_grade,
        is_retake: fields[number_grade_index + 1..].iter().any(|t| vocab.is_retake_marker(t)),
    })
}

/// Tab-delimited layout anchored on the grade cell; blank numeric cells are allowed
///
/// Credits, score and grade points sit immediately around the letter grade, so a row with
/// an emptied score cell still decomposes and is left for validation to judge.
pub fn tab_cells(input: &LineInput<'_>, grammar: &Grammar) -> StrategyOutcome {
    let vocab = &grammar.vocab;
    if input.delimiter != Delimiter::Tab {
        return declined("line is not tab-delimited");
    }
    let cells = &input.cells;

    let Some(category_index) = locate_category(cells, grammar) else {
        return declined("no category cell found");
    };
    let Some(grade_index) =
        (category_index + 1..cells.len()).rev().find(|&i| is_grade_shaped(cells[i], vocab))
    else {
        return declined("no letter grade cell found");
    };
    if grade_index < category_index + 3 {
        return declined("no room for credits and score before the grade");
    }

    let optional_number = |cell: &str| -> Result<Option<f64>, ()> {
        if cell.is_empty() { Ok(None) } else { parse_decimal(cell).map(Some).ok_or(()) }
    };
    let number_grade_cell = cells.get(grade_index + 1).copied().unwrap_or_default();

    let (Ok(credits), Ok(score), Ok(number_grade)) = (
        optional_number(cells[grade_index - 2]),
        optional_number(cells[grade_index - 1]),
        optional_number(number_grade_cell),
    ) else {
        return declined("cells around the grade are not numeric");
    };

    let joined = |range: &[&str]| {
        range.iter().copied().filter(|c| !c.is_empty()).collect::<Vec<_>>().join(" ")
    };

    StrategyOutcome::Parsed(CourseRecord {
        line_number: input.line_number,
        year: cells[0].to_string(),
        semester: cells.get(1).copied().unwrap_or_default().to_string(),
        course_code: cells.get(2).copied().unwrap_or_default().to_string(),
        course_name: joined(&cells[3..category_index]),
        category: cells[category_index].to_string(),
        subcategory: joined(&cells[category_index + 1..grade_index - 2]),
        credits: credits.unwrap_or(0.0),
        score,
        letter_grade: cells[grade_index].to_string(),
        number_grade: number_grade.unwrap_or(0.0),
        is_retake: cells.iter().skip(grade_index + 2).any(|c| vocab.is_retake_marker(c)),
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
