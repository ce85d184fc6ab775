//! End-to-end import tests against the in-memory planner store

mod common;

use common::{CourseLineBuilder, ScriptedSelector, numbered_courses, tab_transcript};
use transcript_importer::models::{Category, MajorType};
use transcript_importer::{
    CourseStore, ImportConfig, ImportError, InMemoryStore, import_transcript, parse_and_validate,
};

fn category_names(store: &InMemoryStore) -> Vec<String> {
    store.categories().iter().map(|c| c.name.clone()).collect()
}

fn semester_names(store: &InMemoryStore) -> Vec<String> {
    store.semesters().iter().map(|s| s.name.clone()).collect()
}

fn category<'a>(store: &'a InMemoryStore, name: &str) -> &'a Category {
    store
        .find_category(name)
        .unwrap_or_else(|| panic!("category {} missing, have {:?}", name, category_names(store)))
}

#[test]
fn test_tab_rows_parse_to_their_cells() {
    let lines = vec![
        CourseLineBuilder::new(),
        CourseLineBuilder::new()
            .year("2021")
            .semester("2")
            .code("GEKS102")
            .name("대학 글쓰기")
            .category("교양")
            .subcategory("핵심교양")
            .credits("2")
            .score("87")
            .grade("B+", "3.5"),
    ];

    let records = parse_and_validate(&tab_transcript(&lines), &ImportConfig::default()).unwrap();

    assert_eq!(records.len(), 2);
    let second = &records[1];
    assert_eq!(second.line_number, 2);
    assert_eq!(second.year, "2021");
    assert_eq!(second.semester, "2");
    assert_eq!(second.course_code, "GEKS102");
    assert_eq!(second.course_name, "대학 글쓰기");
    assert_eq!(second.category, "교양");
    assert_eq!(second.subcategory, "핵심교양");
    assert_eq!(second.credits, 2.0);
    assert_eq!(second.score, Some(87.0));
    assert_eq!(second.letter_grade, "B+");
    assert_eq!(second.number_grade, 3.5);
    assert!(!second.is_retake);
}

#[test]
fn test_two_line_import_builds_axes_and_courses() {
    let lines = vec![
        CourseLineBuilder::new(),
        CourseLineBuilder::new()
            .semester("여름계절")
            .code("GEKS001")
            .name("봉사활동")
            .category("일반선택")
            .credits("2")
            .score("100")
            .grade("P", "0"),
    ];

    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::confirming();
    let summary = import_transcript(
        &tab_transcript(&lines),
        &mut store,
        &mut selector,
        &ImportConfig::default(),
    )
    .unwrap();

    assert_eq!(summary.records, 2);
    assert_eq!(summary.ingested(), 2);
    assert!(summary.ingest.is_clean());
    assert_eq!(semester_names(&store), vec!["2020년 1학기", "계절학기"]);
    assert_eq!(category_names(&store), vec!["일반선택", "COMP 전공"]);
    assert_eq!(store.course_count(), 2);

    let elective = category(&store, "일반선택");
    let service = elective.all_courses().next().unwrap();
    assert_eq!(service.fields.name, "봉사활동");
    assert_eq!(service.fields.grade, "P");
    assert_eq!(service.fields.gpa_value, None);
}

#[test]
fn test_no_major_rows_never_prompts() {
    let lines = vec![
        CourseLineBuilder::new().code("GEKS101").name("철학개론").category("교양"),
        CourseLineBuilder::new().code("GEKS102").name("글쓰기").category("교양"),
    ];

    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::confirming();
    let summary = import_transcript(
        &tab_transcript(&lines),
        &mut store,
        &mut selector,
        &ImportConfig::default(),
    )
    .unwrap();

    assert_eq!(selector.prompts, 0);
    assert!(summary.resolution.is_none());
    assert!(store.categories().iter().all(|c| !c.is_major));
    assert_eq!(summary.ingested(), 2);
}

#[test]
fn test_single_prefix_confirmed_becomes_primary() {
    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::confirming();
    let summary = import_transcript(
        &tab_transcript(&numbered_courses("COMP", 3, "전공")),
        &mut store,
        &mut selector,
        &ImportConfig::default(),
    )
    .unwrap();

    assert_eq!(selector.prompts, 1);
    assert_eq!(selector.seen[0].prefix, "COMP");
    assert_eq!(selector.seen[0].count, 3);

    let major = category(&store, "COMP 전공");
    assert!(major.is_major);
    assert_eq!(major.major_type, MajorType::Primary);
    assert_eq!(major.course_count(), 3);
    assert_eq!(summary.categories_removed, 0);
}

#[test]
fn test_single_prefix_declined_lands_in_general_elective() {
    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::declining();
    let summary = import_transcript(
        &tab_transcript(&numbered_courses("COMP", 2, "전공")),
        &mut store,
        &mut selector,
        &ImportConfig::default(),
    )
    .unwrap();

    let resolution = summary.resolution.unwrap();
    assert_eq!(resolution.primary_prefix, None);
    assert_eq!(resolution.other_prefixes, vec!["COMP"]);

    assert!(category_names(&store).iter().all(|name| !name.starts_with("COMP")));
    assert!(category_names(&store).iter().all(|name| !name.starts_with("_TO_REMOVE_")));
    assert_eq!(category(&store, "일반선택").course_count(), 2);
    assert_eq!(summary.categories_removed, 1);
}

#[test]
fn test_ranked_prefixes_offered_most_frequent_first() {
    let mut lines = numbered_courses("MATH", 3, "전공");
    lines.extend(numbered_courses("COMP", 12, "전공"));

    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::choosing("COMP", Some("MATH"));
    import_transcript(&tab_transcript(&lines), &mut store, &mut selector, &ImportConfig::default())
        .unwrap();

    let offered: Vec<(&str, usize)> =
        selector.seen.iter().map(|s| (s.prefix.as_str(), s.count)).collect();
    assert_eq!(offered, vec![("COMP", 12), ("MATH", 3)]);

    assert_eq!(category(&store, "COMP 전공").major_type, MajorType::Primary);
    assert_eq!(category(&store, "MATH 전공").major_type, MajorType::Secondary);
    assert_eq!(store.course_count(), 15);
}

#[test]
fn test_unselected_prefix_courses_rerouted() {
    let mut lines = numbered_courses("COMP", 4, "전공");
    lines.extend(numbered_courses("MATH", 2, "전공"));
    lines.extend(numbered_courses("PHYS", 1, "전공"));

    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::choosing("COMP", None);
    let summary = import_transcript(
        &tab_transcript(&lines),
        &mut store,
        &mut selector,
        &ImportConfig::default(),
    )
    .unwrap();

    assert_eq!(summary.categories_removed, 2);
    assert!(store.find_category("MATH 전공").is_none());
    assert!(store.find_category("PHYS 전공").is_none());
    assert_eq!(category(&store, "일반선택").course_count(), 3);
    assert_eq!(category(&store, "COMP 전공").course_count(), 4);
    assert_eq!(store.course_count(), 7);
}

#[test]
fn test_cancelled_selection_treats_every_prefix_as_other() {
    let mut lines = numbered_courses("COMP", 2, "전공");
    lines.extend(numbered_courses("MATH", 1, "전공"));

    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::declining();
    let summary = import_transcript(
        &tab_transcript(&lines),
        &mut store,
        &mut selector,
        &ImportConfig::default(),
    )
    .unwrap();

    assert_eq!(selector.prompts, 1);
    assert!(store.categories().iter().all(|c| !c.is_major));
    assert_eq!(category(&store, "일반선택").course_count(), 3);
    assert_eq!(summary.ingested(), 3);
}

#[test]
fn test_unknown_primary_choice_fails_before_mutation() {
    let mut lines = numbered_courses("COMP", 2, "전공");
    lines.extend(numbered_courses("MATH", 1, "전공"));

    let mut store = InMemoryStore::new();
    store.add_semester("기존 학기").unwrap();
    let before = store.clone();

    let mut selector = ScriptedSelector::choosing("BIOL", None);
    let result = import_transcript(
        &tab_transcript(&lines),
        &mut store,
        &mut selector,
        &ImportConfig::default(),
    );

    assert!(matches!(result, Err(ImportError::Resolution(_))));
    assert_eq!(store, before);
}

#[test]
fn test_retake_contributes_no_credits() {
    let lines = vec![CourseLineBuilder::new().trailing("재수강")];

    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::confirming();
    import_transcript(&tab_transcript(&lines), &mut store, &mut selector, &ImportConfig::default())
        .unwrap();

    let course = category(&store, "COMP 전공").all_courses().next().unwrap();
    assert!(course.fields.is_retake);
    assert_eq!(course.fields.credits, 0.0);
}

#[test]
fn test_english_marker_stripped_from_name() {
    let lines = vec![
        CourseLineBuilder::new()
            .code("CHEM101")
            .name("일반화학Ⅰ(영강)")
            .category("학문의기초"),
    ];

    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::confirming();
    import_transcript(&tab_transcript(&lines), &mut store, &mut selector, &ImportConfig::default())
        .unwrap();

    let course = category(&store, "학문의기초").all_courses().next().unwrap();
    assert_eq!(course.fields.name, "일반화학Ⅰ");
    assert!(course.fields.is_english);
}

#[test]
fn test_missing_score_blocks_import() {
    let transcript = "2020\t1\tCOMP101\t자료구조\t전공\t\t3\t\tA+\t4.5";

    let mut store = InMemoryStore::new();
    store.add_semester("기존 학기").unwrap();
    store.add_category("기존 영역", 12.0, false).unwrap();
    let before = store.clone();

    let mut selector = ScriptedSelector::confirming();
    let result = import_transcript(transcript, &mut store, &mut selector, &ImportConfig::default());

    match result {
        Err(ImportError::Validation(report)) => {
            assert_eq!(report.line_numbers(), vec![1]);
            assert!(report.to_string().contains("Line 1: score"));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert_eq!(selector.prompts, 0);
    assert_eq!(store, before);
}

#[test]
fn test_parse_failure_leaves_store_untouched() {
    let transcript = format!(
        "{}\n2020 1 COMP102\n{}",
        CourseLineBuilder::new().tab_line(),
        CourseLineBuilder::new().code("COMP103").tab_line()
    );

    let mut store = InMemoryStore::new();
    store.add_semester("기존 학기").unwrap();
    let before = store.clone();

    let mut selector = ScriptedSelector::confirming();
    let result = import_transcript(&transcript, &mut store, &mut selector, &ImportConfig::default());

    match result {
        Err(ImportError::Parse(error)) => assert_eq!(error.line_numbers(), vec![2]),
        other => panic!("expected parse failure, got {:?}", other),
    }
    assert_eq!(store, before);
}

#[test]
fn test_empty_transcript_rejected() {
    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::confirming();

    let result = import_transcript("  \n\t\n", &mut store, &mut selector, &ImportConfig::default());

    assert!(matches!(result, Err(ImportError::EmptyTranscript)));
}

#[test]
fn test_reimport_replaces_previous_planner() {
    let transcript = tab_transcript(&numbered_courses("COMP", 3, "전공"));
    let mut store = InMemoryStore::new();
    let config = ImportConfig::default();

    import_transcript(&transcript, &mut store, &mut ScriptedSelector::confirming(), &config)
        .unwrap();
    let first_categories = category_names(&store);
    let first_semesters = semester_names(&store);

    import_transcript(&transcript, &mut store, &mut ScriptedSelector::confirming(), &config)
        .unwrap();

    assert_eq!(category_names(&store), first_categories);
    assert_eq!(semester_names(&store), first_semesters);
    assert_eq!(store.course_count(), 3);
}

#[test]
fn test_space_separated_rows_import() {
    let lines = [
        CourseLineBuilder::new(),
        CourseLineBuilder::new()
            .code("GEKS101")
            .name("철학개론")
            .category("교양")
            .subcategory("핵심교양")
            .grade("B0", "3.0"),
    ];
    let transcript =
        lines.iter().map(CourseLineBuilder::space_line).collect::<Vec<_>>().join("\n");

    let mut store = InMemoryStore::new();
    let mut selector = ScriptedSelector::confirming();
    let summary =
        import_transcript(&transcript, &mut store, &mut selector, &ImportConfig::default())
            .unwrap();

    assert_eq!(summary.ingested(), 2);
    let course = category(&store, "교양").all_courses().next().unwrap();
    assert_eq!(course.fields.name, "철학개론");
    assert_eq!(course.fields.gpa_value, Some(3.0));
}
