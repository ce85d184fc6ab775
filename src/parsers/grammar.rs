use regex::Regex;

use crate::config::Vocabulary;

const NUMBER: &str = r"\d+(?:\.\d+)?";

/// Compiled row patterns for one vocabulary
///
/// Capture groups, in order: year, semester, code, name, category, subcategory, credits, score,
/// grade, grade points.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub vocab: Vocabulary,
    pub tab_pattern: Regex,
    pub whitespace_pattern: Regex,
}

impl Grammar {
    pub fn new(vocab: Vocabulary) -> Result<Self, regex::Error> {
        let grade = grade_alternation(&vocab);
        let markers = vocab
            .category_markers
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>();
        let major = regex::escape(&vocab.major_marker);

        let mut tab_category = vec![format!(r"{}[^\t]*", major)];
        tab_category.extend(markers.iter().cloned());
        let mut ws_category = vec![format!(r"{}\S*", major)];
        ws_category.extend(markers);

        let tab_pattern = Regex::new(&format!(
            r"^([^\t]+)\t+([^\t]+)\t+([^\t]+)\t+([^\t]+?)\t+({cat})((?:\t+[^\t\d][^\t]*)*?)\t+({num})\t+({num})\t+({grade})\t+({num})(?:\t.*)?$",
            cat = tab_category.join("|"),
            num = NUMBER,
            grade = grade,
        ))?;

        let whitespace_pattern = Regex::new(&format!(
            r"^(\S+)\s+(\S+)\s+(\S+)\s+(.+?)\s+({cat})(?:\s+(\D+?))?\s+({num})\s+({num})\s+({grade})\s+({num})(?:\s.*)?$",
            cat = ws_category.join("|"),
            num = NUMBER,
            grade = grade,
        ))?;

        Ok(Self { vocab, tab_pattern, whitespace_pattern })
    }
}

/// Alternation of every accepted grade, longest first, including bare `A`..`D` forms
fn grade_alternation(vocab: &Vocabulary) -> String {
    let mut grades: Vec<String> = vocab.letter_grades.clone();
    for grade in &vocab.letter_grades {
        if let Some(bare) = grade.strip_suffix('0') {
            if !bare.is_empty() {
                grades.push(bare.to_string());
            }
        }
    }
    grades.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    grades.dedup();
    grades.iter().map(|g| regex::escape(g)).collect::<Vec<_>>().join("|")
}
