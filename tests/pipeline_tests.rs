//! End-to-end tests for the load → acquire → merge → persist pipeline

use rom_catalog::store::{load_catalog, save_catalog};
use rom_catalog::{
    run, Catalog, CatalogError, CatalogSource, CatalogSummary, GameEntry, LocalScanSource,
    SystemEntry,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Source that hands back a fixed catalog
struct FixedSource(Catalog);

impl CatalogSource for FixedSource {
    fn name(&self) -> &str {
        "fixed"
    }

    fn acquire(&self) -> rom_catalog::Result<Catalog> {
        Ok(self.0.clone())
    }
}

/// Source that always fails
struct FailingSource;

impl CatalogSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn acquire(&self) -> rom_catalog::Result<Catalog> {
        Err(CatalogError::RootNotFound(PathBuf::from("/nowhere")))
    }
}

fn system(dir: &str, names: &[&str]) -> SystemEntry {
    let games = names
        .iter()
        .map(|name| GameEntry {
            name: name.to_string(),
            size: 512,
            path: Some(format!("{}/{}", dir, name)),
            download_url: None,
            extra: Default::default(),
        })
        .collect();
    SystemEntry::new(rom_catalog::systems::display_name(dir), dir, games)
}

fn catalog(systems: Vec<(&str, SystemEntry)>) -> Catalog {
    Catalog::from_systems(
        systems
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<BTreeMap<_, _>>(),
    )
}

fn output_in(dir: &Path) -> PathBuf {
    dir.join("roms.json")
}

#[test]
fn test_run_replaces_and_adds_systems() {
    let temp_dir = TempDir::new().unwrap();
    let output = output_in(temp_dir.path());
    save_catalog(
        &output,
        &catalog(vec![("nes", system("nes", &["Contra.zip", "Metroid.zip"]))]),
    )
    .unwrap();

    let incoming = catalog(vec![
        ("snes", system("snes", &["a.sfc", "b.sfc", "c.sfc"])),
        ("nes", system("nes", &["Zelda.zip"])),
    ]);
    let summary = run(&FixedSource(incoming), &output).unwrap();

    assert_eq!(summary, CatalogSummary { systems: 2, roms: 4 });

    let written = load_catalog(&output);
    let systems: Vec<&str> = written.systems.keys().map(|k| k.as_str()).collect();
    assert_eq!(systems, vec!["nes", "snes"]);
    assert_eq!(written.systems["nes"].rom_count, 1);
    assert_eq!(written.systems["nes"].games[0].name, "Zelda.zip");
    assert_eq!(written.systems["snes"].rom_count, 3);
}

#[test]
fn test_run_keeps_systems_missing_from_new_data() {
    let temp_dir = TempDir::new().unwrap();
    let output = output_in(temp_dir.path());
    save_catalog(&output, &catalog(vec![("gb", system("gb", &["Tetris.gb"]))])).unwrap();

    let summary = run(
        &FixedSource(catalog(vec![("gba", system("gba", &["Metroid.gba"]))])),
        &output,
    )
    .unwrap();

    assert_eq!(summary, CatalogSummary { systems: 2, roms: 2 });
    assert_eq!(load_catalog(&output).systems["gb"].games[0].name, "Tetris.gb");
}

#[test]
fn test_run_with_corrupt_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = output_in(temp_dir.path());
    fs::write(&output, "not json at all").unwrap();

    let summary = run(
        &FixedSource(catalog(vec![("nes", system("nes", &["a.zip"]))])),
        &output,
    )
    .unwrap();

    assert_eq!(summary, CatalogSummary { systems: 1, roms: 1 });
}

#[test]
fn test_run_failed_acquisition_leaves_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let output = output_in(temp_dir.path());
    fs::write(&output, "{\"systems\": {}, \"marker\": true}").unwrap();

    let result = run(&FailingSource, &output);

    assert!(matches!(result, Err(CatalogError::RootNotFound(_))));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "{\"systems\": {}, \"marker\": true}"
    );
}

#[test]
fn test_run_local_scan_end_to_end() {
    let roms = TempDir::new().unwrap();
    fs::create_dir_all(roms.path().join("nes")).unwrap();
    fs::create_dir_all(roms.path().join("gb")).unwrap();
    fs::write(roms.path().join("nes").join("Game.NES"), vec![0u8; 16]).unwrap();
    fs::write(roms.path().join("nes").join("notes.txt"), b"ignored").unwrap();
    fs::write(roms.path().join("gb").join("Tetris.gb"), vec![0u8; 32]).unwrap();

    let out_dir = TempDir::new().unwrap();
    let output = output_in(out_dir.path());

    let summary = run(&LocalScanSource::new(roms.path()), &output).unwrap();
    assert_eq!(summary, CatalogSummary { systems: 2, roms: 2 });

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        written["systems"]["nes"]["games"][0],
        serde_json::json!({"name": "Game.NES", "size": 16, "path": "nes/Game.NES"})
    );
    assert_eq!(written["systems"]["gb"]["display_name"], "Game Boy");
}
