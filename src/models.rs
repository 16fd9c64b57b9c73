use crate::error::{CatalogError, Result};
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Marker identifying a download URL that points into the ROM collection repository
pub const COLLECTION_MARKER: &str = "Rom-Collection";

/// Everything up to and including this prefix is stripped from a download URL
/// to obtain the collection-relative path
pub const COLLECTION_PREFIX: &str = "Rom-Collection/main/";

/// The full `roms.json` document.
///
/// Only the top level is checked: the document must be an object and
/// `systems`, if present, must be an object. A system that cannot be read as a
/// [`SystemEntry`] is kept in `raw_systems` and written back exactly as found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub systems: BTreeMap<String, SystemEntry>,
    pub raw_systems: BTreeMap<String, Value>,
    /// Unknown top-level keys, carried through untouched
    pub extra: Map<String, Value>,
}

/// One system (hardware platform / directory) and its games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub display_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub retropie_directory: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub rom_count: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub games: Vec<GameEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single ROM file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub size: u64,
    /// Collection-relative, forward-slash path. May be absent in a remote
    /// document until [`resolve_path`] fills it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Strings as-is, null or missing as empty, other scalars in their JSON form
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    })
}

/// Non-negative integers, floats and numeric strings; anything else counts as 0
fn lenient_count<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + Default,
{
    let count = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count.and_then(|c| T::try_from(c).ok()).unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// How a system is written out: parsed, or verbatim
#[derive(Serialize)]
#[serde(untagged)]
enum SystemView<'a> {
    Parsed(&'a SystemEntry),
    Raw(&'a Value),
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut systems: BTreeMap<&str, SystemView<'_>> = self
            .systems
            .iter()
            .map(|(name, system)| (name.as_str(), SystemView::Parsed(system)))
            .collect();
        for (name, raw) in &self.raw_systems {
            systems.entry(name.as_str()).or_insert(SystemView::Raw(raw));
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("systems", &systems)?;
        for (key, value) in self.extra.iter().filter(|(k, _)| k.as_str() != "systems") {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = Value::deserialize(deserializer)?;
        Catalog::from_document(document).map_err(serde::de::Error::custom)
    }
}

/// Where a game's path came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamePath {
    /// The entry already carried a non-empty path
    Explicit(String),
    /// Stripped out of the download URL
    FromDownloadUrl(String),
    /// Built as `{system}/{name}` because there was nothing else to go on
    Synthesized(String),
    /// The download URL points outside the collection; no path can be derived
    Unresolved,
}

impl GamePath {
    /// The resolved path, if any
    pub fn into_path(self) -> Option<String> {
        match self {
            GamePath::Explicit(p) | GamePath::FromDownloadUrl(p) | GamePath::Synthesized(p) => {
                Some(p)
            }
            GamePath::Unresolved => None,
        }
    }
}

/// Work out the collection-relative path of a game.
///
/// An existing non-empty path always wins. Otherwise a download URL containing
/// [`COLLECTION_MARKER`] is cut after the last [`COLLECTION_PREFIX`], and a game
/// without any download URL gets `{system_name}/{name}`.
pub fn resolve_path(system_name: &str, game: &GameEntry) -> GamePath {
    if let Some(path) = game.path.as_deref().filter(|p| !p.is_empty()) {
        return GamePath::Explicit(path.to_string());
    }

    match game.download_url.as_deref() {
        Some(url) if url.contains(COLLECTION_MARKER) => {
            // rsplit always yields at least one piece
            let path = url.rsplit(COLLECTION_PREFIX).next().unwrap_or(url);
            GamePath::FromDownloadUrl(path.to_string())
        }
        Some(_) => GamePath::Unresolved,
        None => GamePath::Synthesized(format!("{}/{}", system_name, game.name)),
    }
}

/// Sort games case-insensitively by name
pub fn sort_games(games: &mut [GameEntry]) {
    games.sort_by_cached_key(|g| g.name.to_lowercase());
}

impl SystemEntry {
    /// Build a system entry, keeping `rom_count` in step with `games`
    pub fn new(
        display_name: impl Into<String>,
        retropie_directory: impl Into<String>,
        games: Vec<GameEntry>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            retropie_directory: retropie_directory.into(),
            rom_count: games.len(),
            games,
            extra: Map::new(),
        }
    }

    /// Reset `rom_count` to the number of games. Returns true if it was wrong.
    pub fn recount(&mut self) -> bool {
        let stale = self.rom_count != self.games.len();
        self.rom_count = self.games.len();
        stale
    }

    /// Paths that occur more than once in this system
    pub fn duplicate_paths(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for path in self.games.iter().filter_map(|g| g.path.as_deref()) {
            if !seen.insert(path) && !duplicates.contains(&path) {
                duplicates.push(path);
            }
        }
        duplicates
    }
}

impl Catalog {
    /// Catalog containing the given systems and nothing else
    pub fn from_systems(systems: BTreeMap<String, SystemEntry>) -> Self {
        Self {
            systems,
            ..Default::default()
        }
    }

    /// Read a catalog out of a parsed JSON document, checking only its top-level shape
    pub fn from_document(document: Value) -> Result<Self> {
        let mut extra = match document {
            Value::Object(map) => map,
            _ => return Err(CatalogError::Shape("document is not a JSON object".to_string())),
        };

        let entries = match extra.remove("systems") {
            Some(Value::Object(entries)) => entries,
            None | Some(Value::Null) => Map::new(),
            Some(_) => return Err(CatalogError::Shape("'systems' is not a JSON object".to_string())),
        };

        let mut catalog = Self {
            extra,
            ..Default::default()
        };
        for (name, value) in entries {
            match SystemEntry::deserialize(&value) {
                Ok(system) => {
                    catalog.systems.insert(name, system);
                }
                Err(e) => {
                    log::warn!("Keeping system '{}' unchanged, could not read it: {}", name, e);
                    catalog.raw_systems.insert(name, value);
                }
            }
        }
        Ok(catalog)
    }

    /// Number of systems, parsed or kept verbatim
    pub fn system_count(&self) -> usize {
        self.systems.len() + self.raw_systems.len()
    }

    /// Sum of `rom_count` across all systems. Verbatim systems contribute their
    /// `rom_count` if it is a number.
    pub fn total_roms(&self) -> usize {
        let parsed: usize = self.systems.values().map(|s| s.rom_count).sum();
        let raw: usize = self
            .raw_systems
            .values()
            .filter_map(|v| v.get("rom_count").and_then(Value::as_u64))
            .map(|c| c as usize)
            .sum();
        parsed + raw
    }

    /// Fill in missing game paths. Returns the number of games still unresolved.
    pub fn resolve_paths(&mut self) -> usize {
        let mut unresolved = 0;
        for (system_name, system) in self.systems.iter_mut() {
            for game in system.games.iter_mut() {
                match resolve_path(system_name, game) {
                    GamePath::Explicit(_) => {}
                    GamePath::Unresolved => {
                        log::warn!(
                            "Could not derive a path for {}/{} from {:?}",
                            system_name,
                            game.name,
                            game.download_url
                        );
                        unresolved += 1;
                    }
                    resolved => game.path = resolved.into_path(),
                }
            }
        }
        unresolved
    }

    /// Repair `rom_count` and report duplicate paths
    pub fn normalize(&mut self) {
        for (system_name, system) in self.systems.iter_mut() {
            let stated = system.rom_count;
            if system.recount() {
                log::warn!(
                    "System '{}' listed rom_count {} but has {} games; corrected",
                    system_name,
                    stated,
                    system.games.len()
                );
            }
            let duplicates = system.duplicate_paths();
            if !duplicates.is_empty() {
                log::warn!(
                    "System '{}' has duplicate paths: {}",
                    system_name,
                    duplicates.join(", ")
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
