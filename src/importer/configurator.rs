use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::config::Vocabulary;
use crate::majors::extract_code_prefix;
use crate::models::{CategoryId, CourseRecord, SemesterId};
use crate::store::{CourseStore, StoreResult};

/// Ids of the axes created by [`configure_axes`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisLayout {
    /// Regular semesters keyed by `(year, semester)`
    pub semesters: BTreeMap<(String, String), SemesterId>,
    /// Trailing seasonal/off-curriculum semester, if any record needed it
    pub seasonal: Option<SemesterId>,
    /// Created categories in creation order
    pub categories: Vec<(String, CategoryId)>,
}

/// Record goes into the single seasonal semester instead of a regular one
pub fn is_seasonal_record(record: &CourseRecord, vocab: &Vocabulary) -> bool {
    vocab.is_military_year(&record.year) || vocab.is_seasonal_semester(&record.semester)
}

/// Name of the category a prefixed major record belongs to
pub fn major_category_name(prefix: &str, record: &CourseRecord) -> String {
    format!("{} {}", prefix, record.category_label())
}

/// Numbers ascending, then anything non-numeric by string
fn compare_term_token(a: &str, b: &str) -> Ordering {
    match (a.parse::<u32>(), b.parse::<u32>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Replace the store's semester and category axes with ones derived from `records`
///
/// Existing semesters and categories are removed first; there is no merge.
pub fn configure_axes<S: CourseStore + ?Sized>(
    store: &mut S,
    records: &[CourseRecord],
    vocab: &Vocabulary,
) -> StoreResult<AxisLayout> {
    let old_semesters: Vec<SemesterId> = store.semesters().iter().map(|s| s.id.clone()).collect();
    for id in &old_semesters {
        store.remove_semester(id)?;
    }
    let old_categories: Vec<CategoryId> = store.categories().iter().map(|c| c.id.clone()).collect();
    for id in &old_categories {
        store.remove_category(id)?;
    }

    let mut layout = AxisLayout::default();

    // Semester axis
    let mut terms: Vec<(String, String)> = Vec::new();
    let mut has_seasonal = false;
    let mut has_military = false;
    for record in records {
        if vocab.is_military_year(&record.year) {
            has_military = true;
            has_seasonal = true;
        } else if vocab.is_seasonal_semester(&record.semester) {
            has_seasonal = true;
        } else {
            let key = (record.year.trim().to_string(), record.semester.trim().to_string());
            if !terms.contains(&key) {
                terms.push(key);
            }
        }
    }
    terms.sort_by(|a, b| {
        compare_term_token(&a.0, &b.0).then_with(|| compare_term_token(&a.1, &b.1))
    });

    for (year, semester) in terms {
        let id = store.add_semester(&vocab.semester_name(&year, &semester))?;
        layout.semesters.insert((year, semester), id);
    }
    if has_seasonal {
        let name = if has_military {
            &vocab.merged_seasonal_semester_name
        } else {
            &vocab.seasonal_semester_name
        };
        layout.seasonal = Some(store.add_semester(name)?);
    }

    // Category axis
    let mut non_major: Vec<String> = Vec::new();
    let mut prefixed: Vec<String> = Vec::new();
    let mut literal_major: Vec<String> = Vec::new();
    let push_unique = |names: &mut Vec<String>, name: String| {
        if !names.contains(&name) {
            names.push(name);
        }
    };

    for record in records {
        let category = record.category.trim();
        if category.is_empty() {
            continue;
        }
        if !vocab.is_major_category(category) {
            push_unique(&mut non_major, category.to_string());
            continue;
        }
        let prefix = extract_code_prefix(&record.course_code);
        if prefix.is_empty() {
            push_unique(&mut literal_major, category.to_string());
        } else {
            push_unique(&mut prefixed, major_category_name(&prefix, record));
        }
    }
    push_unique(&mut non_major, vocab.general_elective.clone());

    // Group prefixed names by prefix while keeping first-seen order within each prefix
    let mut prefix_order: Vec<&str> = Vec::new();
    for name in &prefixed {
        let prefix = name.split(' ').next().unwrap_or_default();
        if !prefix_order.contains(&prefix) {
            prefix_order.push(prefix);
        }
    }
    let prefixed_grouped: Vec<&String> = prefix_order
        .iter()
        .flat_map(|p| prefixed.iter().filter(move |n| n.split(' ').next() == Some(*p)))
        .collect();

    for name in &non_major {
        let id = store.add_category(name, 0.0, false)?;
        layout.categories.push((name.clone(), id));
    }
    for name in prefixed_grouped.into_iter().chain(literal_major.iter()) {
        if layout.categories.iter().any(|(existing, _)| existing == name) {
            continue;
        }
        let id = store.add_category(name, 0.0, true)?;
        layout.categories.push((name.clone(), id));
    }

    tracing::info!(
        semesters = layout.semesters.len() + usize::from(layout.seasonal.is_some()),
        categories = layout.categories.len(),
        "Configured planner axes"
    );
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn record(year: &str, semester: &str, code: &str, category: &str, sub: &str) -> CourseRecord {
        CourseRecord {
            line_number: 1,
            year: year.to_string(),
            semester: semester.to_string(),
            course_code: code.to_string(),
            course_name: "과목".to_string(),
            category: category.to_string(),
            subcategory: sub.to_string(),
            credits: 3.0,
            score: Some(90.0),
            letter_grade: "A0".to_string(),
            number_grade: 4.0,
            is_retake: false,
        }
    }

    fn semester_names(store: &InMemoryStore) -> Vec<&str> {
        store.semesters().iter().map(|s| s.name.as_str()).collect()
    }

    fn category_names(store: &InMemoryStore) -> Vec<&str> {
        store.categories().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_semesters_in_chronological_order() {
        let mut store = InMemoryStore::new();
        let records = vec![
            record("2021", "1", "A1", "교양", ""),
            record("2020", "2", "A1", "교양", ""),
            record("2020", "10", "A1", "교양", ""),
            record("2020", "1", "A1", "교양", ""),
            record("2020", "2", "A1", "교양", ""),
        ];

        let layout = configure_axes(&mut store, &records, &Vocabulary::default()).unwrap();
        assert_eq!(
            semester_names(&store),
            vec!["2020년 1학기", "2020년 2학기", "2020년 10학기", "2021년 1학기"]
        );
        assert_eq!(layout.semesters.len(), 4);
        assert!(layout.seasonal.is_none());
    }

    #[test]
    fn test_seasonal_and_military_merge_into_one_semester() {
        let mut store = InMemoryStore::new();
        let records = vec![
            record("2020", "1", "A1", "교양", ""),
            record("2020", "여름계절", "A1", "교양", ""),
            record("군복무중이수", "계절", "MIL1", "교양", ""),
        ];

        let layout = configure_axes(&mut store, &records, &Vocabulary::default()).unwrap();
        assert_eq!(semester_names(&store), vec!["2020년 1학기", "계절/군학점"]);
        assert!(layout.seasonal.is_some());
    }

    #[test]
    fn test_seasonal_only_semester_name() {
        let mut store = InMemoryStore::new();
        let records = vec![record("2020", "겨울계절", "A1", "교양", "")];
        configure_axes(&mut store, &records, &Vocabulary::default()).unwrap();
        assert_eq!(semester_names(&store), vec!["계절학기"]);
    }

    #[test]
    fn test_category_axis_layout() {
        let mut store = InMemoryStore::new();
        let records = vec![
            record("2020", "1", "COMP101", "전공", "전공필수"),
            record("2020", "1", "GEKS001", "교양", ""),
            record("2020", "1", "MATH101", "전공", ""),
            record("2020", "1", "COMP102", "전공", "전공선택"),
            record("2020", "1", "101", "전공기초", ""),
            record("2020", "1", "COMP103", "전공", "전공필수"),
        ];

        let layout = configure_axes(&mut store, &records, &Vocabulary::default()).unwrap();
        assert_eq!(
            category_names(&store),
            vec!["교양", "일반선택", "COMP 전공필수", "COMP 전공선택", "MATH 전공", "전공기초"]
        );
        assert_eq!(layout.categories.len(), 6);

        let majors: Vec<bool> = store.categories().iter().map(|c| c.is_major).collect();
        assert_eq!(majors, vec![false, false, true, true, true, true]);
    }

    #[test]
    fn test_existing_axes_are_replaced() {
        let mut store = InMemoryStore::new();
        store.add_semester("Semester 1").unwrap();
        store.add_category("Old", 12.0, false).unwrap();

        configure_axes(&mut store, &[record("2020", "1", "A1", "교양", "")], &Vocabulary::default())
            .unwrap();
        assert_eq!(semester_names(&store), vec!["2020년 1학기"]);
        assert_eq!(category_names(&store), vec!["교양", "일반선택"]);
    }

    #[test]
    fn test_compare_term_token() {
        assert_eq!(compare_term_token("2", "10"), Ordering::Less);
        assert_eq!(compare_term_token("10", "가을"), Ordering::Less);
        assert_eq!(compare_term_token("가을", "2"), Ordering::Greater);
    }
}
