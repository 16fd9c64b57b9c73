//! Overwrite-by-key merge of freshly acquired systems into an existing catalog

use crate::models::Catalog;
use std::fmt;

/// Which systems a merge added and which it replaced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub added: Vec<String>,
    pub replaced: Vec<String>,
}

/// Counters reported after the catalog is written
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub systems: usize,
    pub roms: usize,
}

impl CatalogSummary {
    pub fn of(catalog: &Catalog) -> Self {
        Self {
            systems: catalog.system_count(),
            roms: catalog.total_roms(),
        }
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total systems: {}\nTotal ROMs: {}", self.systems, self.roms)
    }
}

/// Merge `incoming` into `existing`.
///
/// A system present in `incoming` replaces the existing entry wholesale: its
/// games are not merged, deduplicated, or carried over. Systems that only
/// exist in `existing` are left as they are, as are its extra top-level keys.
/// Systems kept verbatim follow the same rule.
pub fn merge_catalogs(existing: Catalog, incoming: Catalog) -> (Catalog, MergeReport) {
    let mut merged = existing;
    let mut report = MergeReport::default();

    for (name, system) in incoming.systems {
        let old_raw = merged.raw_systems.remove(&name);
        match merged.systems.insert(name.clone(), system) {
            Some(_) => report.replaced.push(name),
            None if old_raw.is_some() => report.replaced.push(name),
            None => report.added.push(name),
        }
    }
    for (name, raw) in incoming.raw_systems {
        let old_parsed = merged.systems.remove(&name);
        match merged.raw_systems.insert(name.clone(), raw) {
            Some(_) => report.replaced.push(name),
            None if old_parsed.is_some() => report.replaced.push(name),
            None => report.added.push(name),
        }
    }

    (merged, report)
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
