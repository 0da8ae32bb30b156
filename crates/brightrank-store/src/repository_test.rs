use brightrank_core::{AnalysisResult, Competitor};

use super::*;
use crate::MemoryStore;

fn repo() -> AppRepository<MemoryStore> {
    AppRepository::new(MemoryStore::new())
}

fn snapshot(timestamp: i64, score: u32) -> HistoricalSnapshot {
    HistoricalSnapshot {
        timestamp,
        date_range: "Last 7 Days".to_string(),
        analysis: AnalysisResult::with_score(score),
    }
}

fn report(id: &str) -> Report {
    Report {
        id: id.to_string(),
        title: "Q3".to_string(),
        date_generated: "2024-05-20".to_string(),
        date_range: "Last 30 Days".to_string(),
        analysis: AnalysisResult::with_score(70),
        competitor_comparison: vec![Competitor {
            name: "Acme".to_string(),
            visibility: 70,
        }],
        visibility_trend: Vec::new(),
    }
}

#[test]
fn empty_store_has_no_profile_history_or_reports() {
    let repo = repo();
    assert!(repo.load_profile().unwrap().is_none());
    assert!(repo.load_history("Acme").unwrap().is_empty());
    assert!(repo.load_reports().unwrap().is_empty());
}

#[test]
fn profile_is_stored_under_its_key_in_camel_case() {
    let repo = repo();
    let profile = BrandProfile::new("Acme", "tea, coffee");
    repo.save_profile(&profile).unwrap();

    let raw = repo.store().get(PROFILE_KEY).unwrap().unwrap();
    assert_eq!(raw["brandName"], "Acme");
    assert_eq!(repo.load_profile().unwrap(), Some(profile));
}

#[test]
fn history_is_kept_per_brand() {
    let repo = repo();
    repo.save_history("Acme", &[snapshot(1, 60), snapshot(2, 65)])
        .unwrap();
    repo.save_history("Other", &[snapshot(3, 40)]).unwrap();

    let acme = repo.load_history("Acme").unwrap();
    assert_eq!(acme.len(), 2);
    assert_eq!(acme[1].analysis.overall_score, 65);
    assert_eq!(repo.load_history("Other").unwrap().len(), 1);

    let raw = repo.store().get(HISTORY_KEY).unwrap().unwrap();
    assert!(raw.get("Acme").is_some() && raw.get("Other").is_some());
}

#[test]
fn reports_append_and_lookup_by_id() {
    let repo = repo();
    assert_eq!(repo.append_report(report("rep_1")).unwrap(), 1);
    assert_eq!(repo.append_report(report("rep_2")).unwrap(), 2);

    assert_eq!(repo.find_report("rep_2").unwrap().unwrap().id, "rep_2");
    assert!(repo.find_report("rep_9").unwrap().is_none());
}

#[test]
fn wrong_shape_is_reported_as_corrupt() {
    let repo = repo();
    repo.store()
        .put(REPORTS_KEY, &serde_json::json!({"not": "a list"}))
        .unwrap();
    let err = repo.load_reports().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == REPORTS_KEY));
}
