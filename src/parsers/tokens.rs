//! Line tokenization and token-shape predicates shared by the parsing strategies.

use crate::config::Vocabulary;

/// How a line's columns are separated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Whitespace,
}

/// A raw line split both ways: tab cells (blanks kept) and whitespace tokens
#[derive(Debug, Clone)]
pub struct LineInput<'a> {
    pub line_number: usize,
    pub raw: &'a str,
    pub delimiter: Delimiter,
    /// Columns in delimiter order; blank cells are kept for tab-delimited lines
    pub cells: Vec<&'a str>,
    /// Non-empty runs of non-whitespace
    pub tokens: Vec<&'a str>,
}

impl<'a> LineInput<'a> {
    pub fn new(line_number: usize, line: &'a str) -> Self {
        let raw = line.trim();
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let tab_cells: Vec<&str> = raw.split('\t').map(str::trim).collect();

        if tab_cells.len() > 1 {
            Self { line_number, raw, delimiter: Delimiter::Tab, cells: tab_cells, tokens }
        } else {
            Self { line_number, raw, delimiter: Delimiter::Whitespace, cells: tokens.clone(), tokens }
        }
    }

    /// Non-blank columns: cells for tab-delimited lines, tokens otherwise
    pub fn fields(&self) -> Vec<&'a str> {
        match self.delimiter {
            Delimiter::Tab => self.cells.iter().copied().filter(|c| !c.is_empty()).collect(),
            Delimiter::Whitespace => self.tokens.clone(),
        }
    }
}

/// `\d+(\.\d+)?`
pub fn is_decimal(token: &str) -> bool {
    let mut parts = token.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match parts.next() {
        Some(fraction) => digits(whole) && digits(fraction),
        None => digits(whole),
    }
}

pub fn parse_decimal(token: &str) -> Option<f64> {
    if is_decimal(token) { token.parse().ok() } else { None }
}

/// Rewrite a bare `A`/`B`/`C`/`D` to its explicit `0` form; anything else is unchanged
pub fn normalize_grade(grade: &str) -> String {
    let grade = grade.trim();
    match grade {
        "A" | "B" | "C" | "D" => format!("{}0", grade),
        _ => grade.to_string(),
    }
}

pub fn is_grade_shaped(token: &str, vocab: &Vocabulary) -> bool {
    let normalized = normalize_grade(token);
    vocab.letter_grades.iter().any(|g| *g == normalized)
}

/// Text written entirely in a non-Latin script, longer than one character
pub fn is_pure_script(token: &str) -> bool {
    token.chars().count() > 1 && token.chars().all(|c| c.is_alphabetic() && !c.is_ascii())
}
