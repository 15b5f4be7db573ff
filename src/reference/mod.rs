// Reference data module - static country tables used for map labeling
// Sources: ISO 3166-1 (alpha-2/alpha-3 codes) and hand-tuned placement data
//
// All tables are read-only and indexed once, on first lookup.

pub mod aliases;
pub mod iso3166;
pub mod labels;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use labels::{LabelOverride, MajorLabel};

/// A static `key -> value` table with a lazily built hash index
///
/// Keys are matched exactly. If a key appears twice, the first entry wins.
pub struct KeyedTable<V: 'static> {
    entries: &'static [(&'static str, V)],
    index: OnceLock<HashMap<&'static str, usize>>,
}

impl<V: 'static> KeyedTable<V> {
    pub const fn new(entries: &'static [(&'static str, V)]) -> Self {
        Self {
            entries,
            index: OnceLock::new(),
        }
    }

    fn index(&self) -> &HashMap<&'static str, usize> {
        self.index.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.entries.len());
            for (i, (key, _)) in self.entries.iter().enumerate() {
                map.entry(*key).or_insert(i);
            }
            map
        })
    }

    pub fn get(&self, key: &str) -> Option<&'static V> {
        let entries = self.entries;
        self.index().get(key).map(|&i| &entries[i].1)
    }

    /// Distinct keys
    pub fn len(&self) -> usize {
        self.index().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order, duplicates included
    pub fn entries(&self) -> &'static [(&'static str, V)] {
        self.entries
    }
}

/// Alpha-2 codes that are never flagged on the map
pub const SUPPRESSED_CODES: &[&str] = &["GB", "IE"];

pub fn is_suppressed(alpha2: &str) -> bool {
    SUPPRESSED_CODES.contains(&alpha2)
}

/// Canonical display spelling for a boundary-dataset name (already upper-cased)
pub fn alias_for(upper_name: &str) -> Option<&'static str> {
    aliases::NAME_ALIASES.get(upper_name).copied()
}

/// Hand-tuned label placement for a canonical name
pub fn override_for(canonical: &str) -> Option<&'static LabelOverride> {
    labels::CROWDED_OVERRIDES.get(canonical)
}

/// Short label for a canonical name
pub fn abbreviation_for(canonical: &str) -> Option<&'static str> {
    labels::ABBREVIATIONS.get(canonical).copied()
}

/// Boundary-dataset (Natural Earth ADM0_A3) code for an alpha-2 code
///
/// Case-insensitive. Falls back to the ISO 3166-1 alpha-3 code.
pub fn alpha3_for(alpha2: &str) -> Option<&'static str> {
    let alpha2 = alpha2.trim().to_uppercase();
    iso3166::NATURAL_EARTH_CODES
        .get(&alpha2)
        .or_else(|| iso3166::ALPHA2_TO_ALPHA3.get(&alpha2))
        .copied()
}

/// Labels always drawn on the map, in drawing order
pub fn major_labels() -> &'static [MajorLabel] {
    labels::MAJOR_LABELS
}
