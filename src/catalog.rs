use std::collections::HashSet;
use std::sync::OnceLock;

use gloo::console::{error, warn};

use crate::error::ContentError;
use crate::model::ActivityRecord;

/// The three activity collections of the logbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Aplausos,
    Dinamicas,
    Juegos,
}

/// Generated filler appended after the authored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fill {
    prefix: &'static str,
    count: usize,
    label: &'static str,
}

static APLAUSOS: OnceLock<Vec<ActivityRecord>> = OnceLock::new();
static DINAMICAS: OnceLock<Vec<ActivityRecord>> = OnceLock::new();
static JUEGOS: OnceLock<Vec<ActivityRecord>> = OnceLock::new();

impl Catalog {
    pub const ALL: [Catalog; 3] = [Catalog::Aplausos, Catalog::Dinamicas, Catalog::Juegos];

    pub fn key(self) -> &'static str {
        match self {
            Catalog::Aplausos => "aplausos",
            Catalog::Dinamicas => "dinamicas",
            Catalog::Juegos => "juegos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Catalog::Aplausos => "Aplausos",
            Catalog::Dinamicas => "Dinámicas",
            Catalog::Juegos => "Juegos",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Catalog::Aplausos => "👏",
            Catalog::Dinamicas => "✨",
            Catalog::Juegos => "🏃‍♂️‍➡️",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Catalog::Aplausos => include_str!("../content/aplausos.json"),
            Catalog::Dinamicas => include_str!("../content/dinamicas.json"),
            Catalog::Juegos => include_str!("../content/juegos.json"),
        }
    }

    fn fill(self) -> Option<Fill> {
        match self {
            Catalog::Aplausos => Some(Fill {
                prefix: "Aplauso",
                count: 49,
                label: "individual",
            }),
            Catalog::Dinamicas => None,
            Catalog::Juegos => Some(Fill {
                prefix: "Juego",
                count: 50,
                label: "lúdico",
            }),
        }
    }

    fn cache(self) -> &'static OnceLock<Vec<ActivityRecord>> {
        match self {
            Catalog::Aplausos => &APLAUSOS,
            Catalog::Dinamicas => &DINAMICAS,
            Catalog::Juegos => &JUEGOS,
        }
    }

    /// Parses the embedded content, appends the filler records and drops
    /// entries that can't be shown. Only a source that isn't a JSON array fails.
    pub fn load_report(self) -> Result<CatalogLoad, ContentError> {
        let mut load = parse_records(self.key(), self.source())?;
        if let Some(fill) = self.fill() {
            load.records.extend(placeholders(fill.prefix, fill.count, fill.label));
        }
        let (records, dropped) = dedupe(self.key(), load.records);
        load.records = records;
        load.skipped.extend(dropped);
        Ok(load)
    }

    pub fn load(self) -> Result<Vec<ActivityRecord>, ContentError> {
        self.load_report().map(|load| load.records)
    }

    /// Loaded once per catalog and kept for the life of the page.
    /// Skipped entries are reported on the console; the rest still shows.
    pub fn records(self) -> &'static [ActivityRecord] {
        self.cache().get_or_init(|| match self.load_report() {
            Ok(load) => {
                for skipped in &load.skipped {
                    warn!(format!("Catalog {}: skipped entry: {skipped}", self.key()));
                }
                load.records
            }
            Err(e) => {
                error!(format!("Catalog {} unavailable: {e}", self.key()));
                Vec::new()
            }
        })
    }
}

/// Records that made it through loading, plus why the others didn't.
#[derive(Debug, Default)]
pub struct CatalogLoad {
    pub records: Vec<ActivityRecord>,
    pub skipped: Vec<ContentError>,
}

/// Entries that don't fit [`ActivityRecord`] are skipped one by one.
pub fn parse_records(source_name: &'static str, json: &str) -> Result<CatalogLoad, ContentError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|error| ContentError::Parse { source_name, error })?;

    let mut load = CatalogLoad::default();
    for (position, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<ActivityRecord>(entry) {
            Ok(record) => load.records.push(record),
            Err(error) => load.skipped.push(ContentError::Entry {
                source_name,
                position,
                error,
            }),
        }
    }
    Ok(load)
}

/// Keeps the first record for each id; blank ids and later repeats are dropped.
pub fn dedupe(
    source_name: &'static str,
    records: Vec<ActivityRecord>,
) -> (Vec<ActivityRecord>, Vec<ContentError>) {
    let mut seen = HashSet::with_capacity(records.len());
    let mut kept = Vec::with_capacity(records.len());
    let mut dropped = Vec::new();
    for (position, record) in records.into_iter().enumerate() {
        if record.id.trim().is_empty() {
            dropped.push(ContentError::EmptyId {
                source_name,
                position,
            });
        } else if !seen.insert(record.id.clone()) {
            dropped.push(ContentError::DuplicateId {
                source_name,
                id: record.id,
            });
        } else {
            kept.push(record);
        }
    }
    (kept, dropped)
}

/// `count` filler records: ids `"{prefix}-{n}"`, titles `"{Prefix} {n}"`, numbered from 1.
pub fn placeholders(prefix: &str, count: usize, label: &str) -> Vec<ActivityRecord> {
    let title_prefix = capitalize(prefix);
    (1..=count)
        .map(|n| {
            ActivityRecord::placeholder(
                format!("{prefix}-{n}"),
                format!("{title_prefix} {n}"),
                label,
            )
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::Tag;

    #[test]
    fn every_catalog_loads() {
        for catalog in Catalog::ALL {
            let records = catalog.load().unwrap();
            assert!(!records.is_empty(), "{} is empty", catalog.key());
        }
    }

    #[test]
    fn catalog_sizes_include_filler() {
        assert_eq!(Catalog::Aplausos.load().unwrap().len(), 30 + 49);
        assert_eq!(Catalog::Dinamicas.load().unwrap().len(), 50);
        assert_eq!(Catalog::Juegos.load().unwrap().len(), 50);
    }

    #[test]
    fn authored_records_come_before_filler() {
        let records = Catalog::Aplausos.load().unwrap();
        assert_eq!(records[0].id, "ap-coordinado");
        assert_eq!(records[30].id, "Aplauso-1");
        assert_eq!(records[30].title, "Aplauso 1");
        assert_eq!(records.last().map(|r| r.id.as_str()), Some("Aplauso-49"));
    }

    #[test]
    fn juegos_filler_has_no_displayable_tags() {
        let records = Catalog::Juegos.load().unwrap();
        assert!(records.iter().all(|r| r.tags().is_empty()));
        assert_eq!(records[0].title, "Juego 1");
    }

    #[test]
    fn dinamicas_carry_detail_sections() {
        let records = Catalog::Dinamicas.load().unwrap();
        let aram = records.iter().find(|r| r.id == "aram-sam-sam").unwrap();
        let headings: Vec<_> = aram.sections().into_iter().map(|(h, _)| h).collect();
        assert_eq!(headings, vec!["Objetivo", "Materiales", "Variantes"]);
        assert_eq!(aram.tags(), vec![Tag::Grupal]);
    }

    #[test]
    fn records_is_cached() {
        let a = Catalog::Dinamicas.records();
        let b = Catalog::Dinamicas.records();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn embedded_content_skips_nothing() {
        for catalog in Catalog::ALL {
            let load = catalog.load_report().unwrap();
            assert!(load.skipped.is_empty(), "{}: {:?}", catalog.key(), load.skipped);
        }
    }

    #[test]
    fn non_array_source_is_a_parse_error() {
        let err = parse_records("broken", "{not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse { source_name: "broken", .. }));
    }

    #[test]
    fn bad_entry_is_skipped_and_the_rest_kept() {
        let json = r#"[
            {"id": "a", "title": "A", "description": ""},
            {"id": 1},
            {"id": "b", "title": "B", "description": ""}
        ]"#;
        let load = parse_records("mixed", json).unwrap();
        let ids: Vec<_> = load.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(load.skipped.len(), 1);
        assert!(matches!(load.skipped[0], ContentError::Entry { position: 1, .. }));
    }

    #[test]
    fn duplicate_ids_keep_first_and_the_rest() {
        let records = vec![
            ActivityRecord::new("x", "First", ""),
            ActivityRecord::new("y", "Other", ""),
            ActivityRecord::new("x", "Second", ""),
        ];
        let (kept, dropped) = dedupe("dup", records);
        let titles: Vec<_> = kept.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Other"]);
        assert!(matches!(dropped.as_slice(), [ContentError::DuplicateId { id, .. }] if id == "x"));
    }

    #[test]
    fn blank_ids_are_dropped() {
        let records = vec![ActivityRecord::new("a", "A", ""), ActivityRecord::new(" ", "B", "")];
        let (kept, dropped) = dedupe("blank", records);
        assert_eq!(kept.len(), 1);
        assert!(matches!(dropped.as_slice(), [ContentError::EmptyId { position: 1, .. }]));
    }

    #[test]
    fn placeholder_naming() {
        let p = placeholders("juego", 2, "grupal");
        assert_eq!(p[0].id, "juego-1");
        assert_eq!(p[1].title, "Juego 2");
        assert!(placeholders("x", 0, "grupal").is_empty());
    }
}
