use crate::model::ActivityRecord;
use crate::tags::trim_text;

/// Records whose title or one of whose known tags contains `query`,
/// ignoring case and surrounding whitespace. A blank query keeps everything.
/// Output order always follows `records`.
pub fn filter<'a>(records: &'a [ActivityRecord], query: &str) -> Vec<&'a ActivityRecord> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

pub fn normalize_query(query: &str) -> String {
    trim_text(query).to_lowercase()
}

/// `needle` must already be normalized.
pub fn matches(record: &ActivityRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.tags().iter().any(|tag| tag.as_str().contains(needle))
}
