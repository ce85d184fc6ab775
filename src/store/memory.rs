use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CourseStore, StoreError, StoreResult};
use crate::models::{
    Category, CategoryId, Course, CourseFields, CourseId, MajorType, Semester, SemesterId,
};

fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Synchronous, last-write-wins planner store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryStore {
    categories: Vec<Category>,
    semesters: Vec<Semester>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn semester(&self, id: &SemesterId) -> Option<&Semester> {
        self.semesters.iter().find(|s| &s.id == id)
    }

    pub fn course_count(&self) -> usize {
        self.categories.iter().map(Category::course_count).sum()
    }

    fn category_mut(&mut self, id: &CategoryId) -> StoreResult<&mut Category> {
        self.categories
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::CategoryNotFound(id.clone()))
    }
}

impl CourseStore for InMemoryStore {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    fn add_category(
        &mut self,
        name: &str,
        required_credits: f64,
        is_major: bool,
    ) -> StoreResult<CategoryId> {
        let id = CategoryId(generate_id());
        self.categories.push(Category {
            id: id.clone(),
            name: name.to_string(),
            required_credits,
            is_major,
            major_type: MajorType::None,
            courses: Default::default(),
        });
        Ok(id)
    }

    fn update_category(
        &mut self,
        id: &CategoryId,
        name: &str,
        required_credits: f64,
        is_major: bool,
        major_type: MajorType,
    ) -> StoreResult<()> {
        let category = self.category_mut(id)?;
        category.name = name.to_string();
        category.required_credits = required_credits;
        category.is_major = is_major;
        category.major_type = major_type;
        Ok(())
    }

    fn remove_category(&mut self, id: &CategoryId) -> StoreResult<()> {
        let before = self.categories.len();
        self.categories.retain(|c| &c.id != id);
        if self.categories.len() == before {
            return Err(StoreError::CategoryNotFound(id.clone()));
        }
        Ok(())
    }

    fn add_semester(&mut self, name: &str) -> StoreResult<SemesterId> {
        let id = SemesterId(generate_id());
        self.semesters.push(Semester { id: id.clone(), name: name.to_string() });
        Ok(id)
    }

    fn remove_semester(&mut self, id: &SemesterId) -> StoreResult<()> {
        let before = self.semesters.len();
        self.semesters.retain(|s| &s.id != id);
        if self.semesters.len() == before {
            return Err(StoreError::SemesterNotFound(id.clone()));
        }
        // Courses filed under the semester go with it
        for category in &mut self.categories {
            category.courses.remove(id);
        }
        Ok(())
    }

    fn reset_all_courses(&mut self) -> StoreResult<()> {
        for category in &mut self.categories {
            category.courses.clear();
        }
        Ok(())
    }

    fn add_course(
        &mut self,
        category_id: &CategoryId,
        semester_id: &SemesterId,
        course: CourseFields,
    ) -> StoreResult<CourseId> {
        if self.semester(semester_id).is_none() {
            return Err(StoreError::SemesterNotFound(semester_id.clone()));
        }
        let category = self.category_mut(category_id)?;
        let id = CourseId(generate_id());
        category
            .courses
            .entry(semester_id.clone())
            .or_default()
            .push(Course { id: id.clone(), fields: course });
        Ok(id)
    }
}
