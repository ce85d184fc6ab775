use crate::config::Vocabulary;
use crate::models::{CourseRecord, PrefixStat};

/// Leading ASCII-alphabetic run of a course code, upper-cased
pub fn extract_code_prefix(code: &str) -> String {
    code.trim().chars().take_while(|c| c.is_ascii_alphabetic()).collect::<String>().to_ascii_uppercase()
}

/// Major-category records with a usable code prefix, grouped by prefix in first-seen order
pub fn group_courses_by_prefix<'a>(
    records: &'a [CourseRecord],
    vocab: &Vocabulary,
) -> Vec<(String, Vec<&'a CourseRecord>)> {
    let mut groups: Vec<(String, Vec<&CourseRecord>)> = Vec::new();

    for record in records {
        if !vocab.is_major_category(&record.category) || record.course_code.trim().is_empty() {
            continue;
        }
        let prefix = extract_code_prefix(&record.course_code);
        if prefix.is_empty() {
            continue;
        }
        match groups.iter_mut().find(|(p, _)| *p == prefix) {
            Some((_, members)) => members.push(record),
            None => groups.push((prefix, vec![record])),
        }
    }

    groups
}

/// Prefix frequencies among major records, most frequent first
///
/// Ties keep first-seen order.
pub fn analyze_major_code_prefixes(records: &[CourseRecord], vocab: &Vocabulary) -> Vec<PrefixStat> {
    let mut stats: Vec<PrefixStat> = group_courses_by_prefix(records, vocab)
        .into_iter()
        .map(|(prefix, members)| PrefixStat {
            prefix,
            count: members.len(),
            representative_category: members
                .first()
                .map(|r| r.category.clone())
                .unwrap_or_default(),
        })
        .collect();

    // sort_by is stable
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}
