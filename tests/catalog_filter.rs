//! End-to-end search behavior over hand-built and embedded catalogs.

use bitacora_deportiva::{filter, sanitize, ActivityRecord, Catalog, Route, Selection, Tag};
use pretty_assertions::assert_eq;

fn scenario() -> Vec<ActivityRecord> {
    vec![
        ActivityRecord::new("ap-coordinado", "Aplauso Coordinado", "").with_labels(["grupal"]),
        ActivityRecord::new("ap-lluvia", "Lluvia", "").with_labels(["individual"]),
        ActivityRecord::new("ap-domino", "Dominó", "").with_labels(["grupal"]),
    ]
}

fn titles<'a>(records: &[&'a ActivityRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn three_record_scenario() {
    let records = scenario();
    assert_eq!(
        titles(&filter(&records, "grupal")),
        vec!["Aplauso Coordinado", "Dominó"]
    );
    assert_eq!(titles(&filter(&records, "LLUVIA")), vec!["Lluvia"]);
    assert_eq!(
        titles(&filter(&records, "")),
        vec!["Aplauso Coordinado", "Lluvia", "Dominó"]
    );
}

#[test]
fn accented_titles_match_accented_queries() {
    let records = scenario();
    assert_eq!(titles(&filter(&records, "DOMINÓ")), vec!["Dominó"]);
    assert!(filter(&records, "domino").is_empty());
}

#[test]
fn tag_click_then_browse_flow() {
    let records = Catalog::Aplausos.load().unwrap();

    // chip click: query becomes the tag name
    let query = Tag::Individual.as_str();
    let hits = filter(&records, query);
    assert!(hits.iter().any(|r| r.id == "ap-lluvia"));
    assert!(hits.iter().all(|r| r.tags().contains(&Tag::Individual)));

    let mut selection = Selection::default();
    selection.select(hits[0].id.clone());
    assert_eq!(selection.resolve(&records).map(|r| &r.id), Some(&hits[0].id));
    selection.dismiss();
    assert!(selection.resolve(&records).is_none());
}

#[test]
fn grupal_search_over_real_content_keeps_source_order() {
    let records = Catalog::Dinamicas.load().unwrap();
    let hits = filter(&records, " Grupal ");
    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| records.iter().position(|r| r.id == hit.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert!(hits.len() < records.len());
}

#[test]
fn every_catalog_has_a_route() {
    for catalog in Catalog::ALL {
        let route = Route::from(catalog);
        assert_eq!(Route::parse(route.key()), Some(route));
        assert_eq!(route.key(), catalog.key());
    }
}

#[test]
fn embedded_labels_are_all_known_or_filler() {
    for catalog in Catalog::ALL {
        for record in catalog.load().unwrap() {
            let kept = sanitize(&record.labels);
            assert!(
                kept.len() == record.labels.len() || record.labels == ["lúdico"],
                "{} has unexpected labels {:?}",
                record.id,
                record.labels
            );
        }
    }
}
