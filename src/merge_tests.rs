//! Tests for catalog merging

use super::*;
use crate::models::{GameEntry, SystemEntry};
use std::collections::BTreeMap;

fn system(dir: &str, names: &[&str]) -> SystemEntry {
    let games = names
        .iter()
        .map(|name| GameEntry {
            name: name.to_string(),
            size: 1024,
            path: Some(format!("{}/{}", dir, name)),
            download_url: None,
            extra: Default::default(),
        })
        .collect();
    SystemEntry::new(dir.to_uppercase(), dir, games)
}

fn catalog(systems: Vec<(&str, SystemEntry)>) -> Catalog {
    Catalog::from_systems(
        systems
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<BTreeMap<_, _>>(),
    )
}

#[test]
fn test_merge_replaces_whole_system() {
    let existing = catalog(vec![("nes", system("nes", &["a.zip", "b.zip"]))]);
    let incoming = catalog(vec![("nes", system("nes", &["c.zip"]))]);

    let (merged, report) = merge_catalogs(existing, incoming.clone());

    assert_eq!(merged.systems["nes"], incoming.systems["nes"]);
    assert_eq!(merged.systems["nes"].rom_count, 1);
    assert_eq!(report.replaced, vec!["nes".to_string()]);
    assert!(report.added.is_empty());
}

#[test]
fn test_merge_keeps_systems_only_in_existing() {
    let existing = catalog(vec![
        ("gb", system("gb", &["tetris.gb"])),
        ("nes", system("nes", &["a.zip"])),
    ]);
    let incoming = catalog(vec![("snes", system("snes", &["zelda.sfc"]))]);

    let (merged, report) = merge_catalogs(existing.clone(), incoming.clone());

    assert_eq!(merged.systems.len(), 3);
    assert_eq!(merged.systems["gb"], existing.systems["gb"]);
    assert_eq!(merged.systems["nes"], existing.systems["nes"]);
    assert_eq!(merged.systems["snes"], incoming.systems["snes"]);
    assert_eq!(report.added, vec!["snes".to_string()]);
}

#[test]
fn test_merge_does_not_deduplicate_games() {
    let existing = catalog(vec![]);
    let incoming = catalog(vec![("nes", system("nes", &["a.zip", "a.zip"]))]);

    let (merged, _) = merge_catalogs(existing, incoming);

    assert_eq!(merged.systems["nes"].games.len(), 2);
}

#[test]
fn test_merge_into_empty_catalog() {
    let incoming = catalog(vec![
        ("nes", system("nes", &["a.zip"])),
        ("snes", system("snes", &["b.sfc", "c.sfc"])),
    ]);

    let (merged, report) = merge_catalogs(Catalog::default(), incoming.clone());

    assert_eq!(merged, incoming);
    assert_eq!(report.added.len(), 2);
}

#[test]
fn test_merge_preserves_existing_extra_keys() {
    let mut existing = catalog(vec![]);
    existing
        .extra
        .insert("source".to_string(), serde_json::json!("manual"));

    let (merged, _) = merge_catalogs(existing, catalog(vec![("nes", system("nes", &["a.zip"]))]));

    assert_eq!(merged.extra["source"], "manual");
}

#[test]
fn test_summary_counts_roms() {
    let merged = catalog(vec![
        ("nes", system("nes", &["a.zip"])),
        ("snes", system("snes", &["b.sfc", "c.sfc", "d.sfc"])),
    ]);

    let summary = CatalogSummary::of(&merged);
    assert_eq!(summary, CatalogSummary { systems: 2, roms: 4 });
    assert_eq!(summary.to_string(), "Total systems: 2\nTotal ROMs: 4");
}

#[test]
fn test_merge_replaces_verbatim_system() {
    let mut existing = catalog(vec![]);
    existing
        .raw_systems
        .insert("nes".to_string(), serde_json::json!({"games": "broken"}));
    existing
        .raw_systems
        .insert("gb".to_string(), serde_json::json!({"games": 7}));

    let incoming = catalog(vec![("nes", system("nes", &["a.zip"]))]);

    let (merged, report) = merge_catalogs(existing, incoming);

    assert!(!merged.raw_systems.contains_key("nes"));
    assert_eq!(merged.systems["nes"].rom_count, 1);
    assert_eq!(merged.raw_systems["gb"], serde_json::json!({"games": 7}));
    assert_eq!(report.replaced, vec!["nes".to_string()]);
    assert_eq!(CatalogSummary::of(&merged).systems, 2);
}
