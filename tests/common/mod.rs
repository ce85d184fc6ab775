//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use transcript_importer::majors::{MajorSelector, ResolutionError};
use transcript_importer::models::{MajorChoice, PrefixStat};

/// Builder for one transcript row
#[derive(Debug, Clone)]
pub struct CourseLineBuilder {
    year: String,
    semester: String,
    code: String,
    name: String,
    category: String,
    subcategory: String,
    credits: String,
    score: String,
    grade: String,
    grade_points: String,
    trailing: Vec<String>,
}

impl CourseLineBuilder {
    /// A regular 3-credit major course, spring 2020
    pub fn new() -> Self {
        Self {
            year: "2020".to_string(),
            semester: "1".to_string(),
            code: "COMP101".to_string(),
            name: "자료구조".to_string(),
            category: "전공".to_string(),
            subcategory: String::new(),
            credits: "3".to_string(),
            score: "95".to_string(),
            grade: "A+".to_string(),
            grade_points: "4.5".to_string(),
            trailing: Vec::new(),
        }
    }

    pub fn year(mut self, year: &str) -> Self {
        self.year = year.to_string();
        self
    }

    pub fn semester(mut self, semester: &str) -> Self {
        self.semester = semester.to_string();
        self
    }

    pub fn code(mut self, code: &str) -> Self {
        self.code = code.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn subcategory(mut self, subcategory: &str) -> Self {
        self.subcategory = subcategory.to_string();
        self
    }

    pub fn credits(mut self, credits: &str) -> Self {
        self.credits = credits.to_string();
        self
    }

    pub fn score(mut self, score: &str) -> Self {
        self.score = score.to_string();
        self
    }

    pub fn grade(mut self, grade: &str, grade_points: &str) -> Self {
        self.grade = grade.to_string();
        self.grade_points = grade_points.to_string();
        self
    }

    /// Append a trailing cell such as a retake marker
    pub fn trailing(mut self, cell: &str) -> Self {
        self.trailing.push(cell.to_string());
        self
    }

    fn cells(&self) -> Vec<&str> {
        let mut cells = vec![
            self.year.as_str(),
            self.semester.as_str(),
            self.code.as_str(),
            self.name.as_str(),
            self.category.as_str(),
            self.subcategory.as_str(),
            self.credits.as_str(),
            self.score.as_str(),
            self.grade.as_str(),
            self.grade_points.as_str(),
        ];
        cells.extend(self.trailing.iter().map(String::as_str));
        cells
    }

    /// Tab-separated row with every cell kept, as copied from a portal table
    pub fn tab_line(&self) -> String {
        self.cells().join("\t")
    }

    /// Space-separated row; empty cells disappear
    pub fn space_line(&self) -> String {
        self.cells().into_iter().filter(|c| !c.is_empty()).collect::<Vec<_>>().join(" ")
    }
}

pub fn tab_transcript(lines: &[CourseLineBuilder]) -> String {
    lines.iter().map(CourseLineBuilder::tab_line).collect::<Vec<_>>().join("\n")
}

/// Repeat a course `count` times with numbered codes under one prefix
pub fn numbered_courses(prefix: &str, count: usize, category: &str) -> Vec<CourseLineBuilder> {
    (0..count)
        .map(|i| {
            CourseLineBuilder::new()
                .code(&format!("{}{:03}", prefix, 100 + i))
                .name(&format!("{} 과목 {}", prefix, i))
                .category(category)
        })
        .collect()
}

/// Selector double that answers from a script and counts prompts
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    pub confirm: bool,
    pub choice: Option<MajorChoice>,
    pub prompts: usize,
    pub seen: Vec<PrefixStat>,
}

impl ScriptedSelector {
    pub fn confirming() -> Self {
        Self { confirm: true, ..Self::default() }
    }

    pub fn declining() -> Self {
        Self::default()
    }

    pub fn choosing(primary: &str, secondary: Option<&str>) -> Self {
        Self {
            choice: Some(MajorChoice::new(primary, secondary.map(str::to_string))),
            ..Self::default()
        }
    }
}

impl MajorSelector for ScriptedSelector {
    fn confirm_primary(&mut self, stat: &PrefixStat) -> Result<bool, ResolutionError> {
        self.prompts += 1;
        self.seen = vec![stat.clone()];
        Ok(self.confirm)
    }

    fn choose_majors(
        &mut self,
        stats: &[PrefixStat],
    ) -> Result<Option<MajorChoice>, ResolutionError> {
        self.prompts += 1;
        self.seen = stats.to_vec();
        Ok(self.choice.clone())
    }
}

/// Temp directory holding a transcript file and a planner state path
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_transcript(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("transcript.txt");
        fs::write(&path, content).expect("Failed to write transcript");
        path
    }

    pub fn state_path(&self) -> PathBuf {
        self.temp_dir.path().join("state").join("planner.json")
    }
}
