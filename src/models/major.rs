use serde::{Deserialize, Serialize};

/// Frequency of one course-code prefix among major-category records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixStat {
    pub prefix: String,
    pub count: usize,
    /// First category observed for this prefix
    pub representative_category: String,
}

/// Which major a category counts toward
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorType {
    Primary,
    Secondary,
    #[default]
    None,
}

/// A user's pick from the ranked prefix list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorChoice {
    pub primary: String,
    pub secondary: Option<String>,
}

impl MajorChoice {
    pub fn new(primary: impl Into<String>, secondary: Option<String>) -> Self {
        Self { primary: primary.into(), secondary }
    }
}

/// Partition of every observed prefix into primary, secondary and "other"
///
/// `primary_prefix` is `None` only when the user declined the single prefix or cancelled the
/// selection; every prefix is then "other".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorResolution {
    pub primary_prefix: Option<String>,
    pub secondary_prefixes: Vec<String>,
    pub other_prefixes: Vec<String>,
}

impl MajorResolution {
    pub fn all_other(prefixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            primary_prefix: None,
            secondary_prefixes: Vec::new(),
            other_prefixes: prefixes.into_iter().collect(),
        }
    }

    pub fn major_type_of(&self, prefix: &str) -> Option<MajorType> {
        if self.primary_prefix.as_deref() == Some(prefix) {
            Some(MajorType::Primary)
        } else if self.secondary_prefixes.iter().any(|p| p == prefix) {
            Some(MajorType::Secondary)
        } else {
            None
        }
    }

    pub fn is_other(&self, prefix: &str) -> bool {
        self.other_prefixes.iter().any(|p| p == prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_type_lookup() {
        let resolution = MajorResolution {
            primary_prefix: Some("COMP".to_string()),
            secondary_prefixes: vec!["MATH".to_string()],
            other_prefixes: vec!["PHYS".to_string()],
        };
        assert_eq!(resolution.major_type_of("COMP"), Some(MajorType::Primary));
        assert_eq!(resolution.major_type_of("MATH"), Some(MajorType::Secondary));
        assert_eq!(resolution.major_type_of("PHYS"), None);
        assert!(resolution.is_other("PHYS"));
        assert!(!resolution.is_other("COMP"));
    }

    #[test]
    fn test_all_other_has_no_primary() {
        let resolution = MajorResolution::all_other(vec!["COMP".to_string()]);
        assert!(resolution.primary_prefix.is_none());
        assert!(resolution.is_other("COMP"));
    }
}
