use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::major::MajorType;

macro_rules! planner_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

planner_id!(CategoryId);
planner_id!(SemesterId);
planner_id!(CourseId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,
    pub name: String,
}

/// Course payload handed to the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseFields {
    pub name: String,
    pub credits: f64,
    pub grade: String,
    /// Grade points; `None` for pass/fail style grades
    pub gpa_value: Option<f64>,
    pub is_retake: bool,
    pub is_dropped: bool,
    pub is_english: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    #[serde(flatten)]
    pub fields: CourseFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub required_credits: f64,
    pub is_major: bool,
    #[serde(default)]
    pub major_type: MajorType,
    /// Courses keyed by semester
    #[serde(default)]
    pub courses: BTreeMap<SemesterId, Vec<Course>>,
}

impl Category {
    pub fn course_count(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }

    pub fn all_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values().flatten()
    }
}
