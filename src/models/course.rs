use serde::{Deserialize, Serialize};

/// One parsed transcript row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// 1-based line in the pasted text this record came from
    pub line_number: usize,
    pub year: String,
    pub semester: String,
    pub course_code: String,
    pub course_name: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    pub credits: f64,
    /// `None` when the score cell was blank
    pub score: Option<f64>,
    pub letter_grade: String,
    pub number_grade: f64,
    #[serde(default)]
    pub is_retake: bool,
}

impl CourseRecord {
    /// Retake and withdrawal rows are the same flag in the transcript
    pub fn is_dropped(&self) -> bool {
        self.is_retake
    }

    /// Subcategory if present, otherwise the main category
    pub fn category_label(&self) -> &str {
        let sub = self.subcategory.trim();
        if sub.is_empty() { self.category.trim() } else { sub }
    }
}
