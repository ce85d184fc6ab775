use serde::{Deserialize, Serialize};

/// Locale markers recognised in a pasted transcript.
///
/// Defaults describe the Korean university transcript layout:
///
/// ```text
/// 년도 학기 학수번호 과목명 이수구분 [교양영역] [과목유형] 학점 점수 등급 평점 [재수강...] [삭제구분]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// First token of an off-curriculum (military service) credit row
    pub military_sentinel: String,
    /// Substring marking a seasonal (intersession) semester token
    pub seasonal_marker: String,
    /// Substring marking a major category (`전공`, `전공필수`, ...)
    pub major_marker: String,
    /// Exact non-major category tokens
    pub category_markers: Vec<String>,
    /// Catch-all elective bucket for unselected major prefixes
    pub general_elective: String,
    /// Tokens that flag a retake or withdrawn course
    pub retake_markers: Vec<String>,
    /// Course-name markers for courses taught in English
    pub english_markers: Vec<String>,
    /// First tokens of a table header row
    pub header_markers: Vec<String>,
    /// Name prefix for categories scheduled for deletion
    pub removal_marker: String,
    /// Regular semester display name; `{year}` and `{semester}` are substituted
    pub semester_name_template: String,
    pub seasonal_semester_name: String,
    /// Seasonal semester name when military-service credit is present
    pub merged_seasonal_semester_name: String,
    /// Letter grades accepted as grade-shaped tokens (after normalization)
    pub letter_grades: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            military_sentinel: "군복무중이수".to_string(),
            seasonal_marker: "계절".to_string(),
            major_marker: "전공".to_string(),
            category_markers: vec![
                "교양".to_string(),
                "학문의기초".to_string(),
                "일반선택".to_string(),
                "교직".to_string(),
            ],
            general_elective: "일반선택".to_string(),
            retake_markers: vec!["재수강".to_string(), "학점포기".to_string()],
            english_markers: vec!["영강".to_string(), "외국어강의".to_string()],
            header_markers: vec!["년도".to_string()],
            removal_marker: "_TO_REMOVE_".to_string(),
            semester_name_template: "{year}년 {semester}학기".to_string(),
            seasonal_semester_name: "계절학기".to_string(),
            merged_seasonal_semester_name: "계절/군학점".to_string(),
            letter_grades: [
                "A+", "A0", "A-", "B+", "B0", "B-", "C+", "C0", "C-", "D+", "D0", "D-", "F", "P",
                "NP",
            ]
            .iter()
            .map(|g| g.to_string())
            .collect(),
        }
    }
}

impl Vocabulary {
    pub fn is_major_category(&self, category: &str) -> bool {
        !self.major_marker.is_empty() && category.contains(&self.major_marker)
    }

    pub fn is_category_marker(&self, token: &str) -> bool {
        self.is_major_category(token) || self.category_markers.iter().any(|m| m == token)
    }

    pub fn is_military_year(&self, year: &str) -> bool {
        year == self.military_sentinel
    }

    pub fn is_seasonal_semester(&self, semester: &str) -> bool {
        !self.seasonal_marker.is_empty() && semester.contains(&self.seasonal_marker)
    }

    pub fn is_retake_marker(&self, token: &str) -> bool {
        self.retake_markers.iter().any(|m| m == token)
    }

    pub fn contains_retake_marker(&self, text: &str) -> bool {
        self.retake_markers.iter().any(|m| text.contains(m.as_str()))
    }

    pub fn is_header_marker(&self, token: &str) -> bool {
        self.header_markers.iter().any(|m| m == token)
    }

    pub fn has_english_marker(&self, name: &str) -> bool {
        self.english_markers.iter().any(|m| name.contains(m.as_str()))
    }

    pub fn is_marked_for_removal(&self, category_name: &str) -> bool {
        category_name.starts_with(&self.removal_marker)
    }

    pub fn removal_name(&self, category_name: &str) -> String {
        format!("{}{}", self.removal_marker, category_name)
    }

    pub fn semester_name(&self, year: &str, semester: &str) -> String {
        self.semester_name_template.replace("{year}", year).replace("{semester}", semester)
    }
}
