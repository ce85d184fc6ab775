//! Credit and GPA statistics over a planner
//!
//! Rules:
//! - Retaken or dropped courses are ignored entirely.
//! - `F` counts toward GPA credits with zero points, but not toward completed credits.
//! - Pass/fail grades and courses without grade points count toward completed credits only.

use serde::Serialize;

use crate::models::{Category, Course, MajorType};
use crate::store::CourseStore;

const FAIL_GRADE: &str = "F";
const PASS_FAIL_GRADES: &[&str] = &["P", "NP"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GpaTally {
    pub credits: f64,
    pub points: f64,
}

impl GpaTally {
    fn add(&mut self, credits: f64, points: f64) {
        self.credits += credits;
        self.points += credits * points;
    }

    /// Zero when no graded credits exist
    pub fn gpa(&self) -> f64 {
        if self.credits > 0.0 { self.points / self.credits } else { 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProgress {
    pub name: String,
    pub completed_credits: f64,
    pub required_credits: f64,
    pub is_major: bool,
    pub major_type: MajorType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreditSummary {
    pub categories: Vec<CategoryProgress>,
    pub completed_credits: f64,
    pub required_credits: f64,
    pub overall: GpaTally,
    pub major: GpaTally,
    pub primary_major: GpaTally,
    pub secondary_major: GpaTally,
    /// Passed English-taught courses
    pub english_courses: usize,
}

impl CreditSummary {
    /// Completed share of required credits as a percentage
    pub fn completion(&self) -> f64 {
        if self.required_credits > 0.0 {
            self.completed_credits / self.required_credits * 100.0
        } else {
            0.0
        }
    }
}

fn counts_toward_gpa(course: &Course) -> Option<f64> {
    let fields = &course.fields;
    if fields.grade == FAIL_GRADE {
        return Some(0.0);
    }
    if fields.grade.is_empty() || PASS_FAIL_GRADES.contains(&fields.grade.as_str()) {
        return None;
    }
    fields.gpa_value
}

fn category_progress(category: &Category, summary: &mut CreditSummary) -> CategoryProgress {
    let mut completed = 0.0;

    for course in category.all_courses() {
        let fields = &course.fields;
        if fields.is_retake || fields.is_dropped {
            continue;
        }
        if fields.grade != FAIL_GRADE {
            completed += fields.credits;
        }
        if fields.is_english && fields.grade != FAIL_GRADE {
            summary.english_courses += 1;
        }

        if let Some(points) = counts_toward_gpa(course) {
            summary.overall.add(fields.credits, points);
            if category.is_major {
                summary.major.add(fields.credits, points);
                match category.major_type {
                    MajorType::Primary => summary.primary_major.add(fields.credits, points),
                    MajorType::Secondary => summary.secondary_major.add(fields.credits, points),
                    MajorType::None => {}
                }
            }
        }
    }

    CategoryProgress {
        name: category.name.clone(),
        completed_credits: completed,
        required_credits: category.required_credits,
        is_major: category.is_major,
        major_type: category.major_type,
    }
}

pub fn summarize<S: CourseStore + ?Sized>(store: &S) -> CreditSummary {
    let mut summary = CreditSummary::default();

    for category in store.categories() {
        let progress = category_progress(category, &mut summary);
        summary.completed_credits += progress.completed_credits;
        summary.required_credits += progress.required_credits;
        summary.categories.push(progress);
    }

    summary
}
