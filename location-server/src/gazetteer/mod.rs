//! Static gazetteer of airports and stations.
//!
//! Known transport hubs with their terminals and platforms, keyed by stable
//! slugs (e.g. `heathrow-airport`). The tables are compiled in and never
//! mutated; [`Gazetteer`] indexes them once at start-up.
//!
//! [`categories`] holds the curated query lists used by category search.

mod airports;
pub mod categories;
mod stations;

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::{Coordinates, LocationSuggestion, REGION, SuggestionMetadata};

pub use airports::AIRPORTS;
pub use categories::{CATEGORIES, SearchCategory};
pub use stations::STATIONS;

/// Kind of a gazetteer location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Airport,
    Station,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Airport => "airport",
            LocationKind::Station => "station",
        }
    }

    /// Parse `airport` / `station` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "airport" | "airports" => Some(LocationKind::Airport),
            "station" | "stations" | "train_station" | "train_stations" => {
                Some(LocationKind::Station)
            }
            _ => None,
        }
    }

    /// The sub-location kind this location contains.
    pub fn sub_location(&self) -> SubLocationKind {
        match self {
            LocationKind::Airport => SubLocationKind::Terminal,
            LocationKind::Station => SubLocationKind::Platform,
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a sub-location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubLocationKind {
    Terminal,
    Platform,
}

impl SubLocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubLocationKind::Terminal => "terminal",
            SubLocationKind::Platform => "platform",
        }
    }
}

/// An airport or station.
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub kind: LocationKind,
    pub coordinates: Coordinates,
    pub address: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub postcode: Option<&'static str>,
    /// Terminals or platforms, in display order.
    pub terminals: &'static [GazetteerTerminal],
}

/// A terminal or platform belonging to a [`GazetteerEntry`].
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerTerminal {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: SubLocationKind,
    pub coordinates: Coordinates,
    pub description: Option<&'static str>,
    pub parent_location_id: &'static str,
}

impl GazetteerTerminal {
    pub(crate) const fn terminal(
        id: &'static str,
        name: &'static str,
        lat: f64,
        lng: f64,
        description: Option<&'static str>,
        parent_location_id: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            kind: SubLocationKind::Terminal,
            coordinates: Coordinates::new(lat, lng),
            description,
            parent_location_id,
        }
    }

    pub(crate) const fn platform(
        id: &'static str,
        name: &'static str,
        lat: f64,
        lng: f64,
        description: Option<&'static str>,
        parent_location_id: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            kind: SubLocationKind::Platform,
            coordinates: Coordinates::new(lat, lng),
            description,
            parent_location_id,
        }
    }

    /// Convert to a suggestion linked back to its parent.
    pub fn to_suggestion(&self, parent: &GazetteerEntry) -> LocationSuggestion {
        LocationSuggestion {
            id: self.id.to_string(),
            address: format!("{}, {}", self.name, parent.full_name),
            main_text: self.name.to_string(),
            secondary_text: match self.description {
                Some(d) => format!("{d} - {}", parent.full_name),
                None => parent.full_name.to_string(),
            },
            coordinates: self.coordinates,
            metadata: SuggestionMetadata {
                primary_type: self.kind.as_str().to_string(),
                postcode: parent.postcode.map(str::to_string),
                city: Some(parent.city.to_string()),
                region: REGION.to_string(),
                category: parent.kind.as_str().to_string(),
                place_id: self.id.to_string(),
                parent_place_id: Some(parent.id.to_string()),
            },
        }
    }
}

impl GazetteerEntry {
    /// Convert the location itself to a suggestion.
    pub fn to_suggestion(&self) -> LocationSuggestion {
        LocationSuggestion {
            id: self.id.to_string(),
            address: format!("{}, {}", self.full_name, self.address),
            main_text: self.name.to_string(),
            secondary_text: self.address.to_string(),
            coordinates: self.coordinates,
            metadata: SuggestionMetadata {
                primary_type: self.kind.as_str().to_string(),
                postcode: self.postcode.map(str::to_string),
                city: Some(self.city.to_string()),
                region: REGION.to_string(),
                category: self.kind.as_str().to_string(),
                place_id: self.id.to_string(),
                parent_place_id: None,
            },
        }
    }
}

/// Structural problems in a gazetteer table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GazetteerError {
    #[error("duplicate gazetteer id: {0}")]
    DuplicateId(String),

    #[error("{child} points at missing parent {parent}")]
    MissingParent { child: String, parent: String },

    #[error("{child} is listed under {listed_under} but names {parent} as parent")]
    MismatchedParent {
        child: String,
        listed_under: String,
        parent: String,
    },
}

/// Read-only index over the gazetteer tables.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    by_id: HashMap<&'static str, &'static GazetteerEntry>,
    /// Entries in table order, for deterministic name lookups.
    ordered: Vec<&'static GazetteerEntry>,
}

impl Gazetteer {
    /// Index the given tables.
    ///
    /// Later duplicates of an id are ignored; [`Gazetteer::validate`] reports them.
    pub fn from_tables(tables: &[&'static [GazetteerEntry]]) -> Self {
        let mut by_id = HashMap::new();
        let mut ordered = Vec::new();

        for entry in tables.iter().copied().flat_map(|t| t.iter()) {
            if let Entry::Vacant(slot) = by_id.entry(entry.id) {
                slot.insert(entry);
                ordered.push(entry);
            }
        }

        Self { by_id, ordered }
    }

    /// The built-in UK airports and stations.
    pub fn uk() -> Self {
        Self::from_tables(&[AIRPORTS, STATIONS])
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&'static GazetteerEntry> {
        self.by_id.get(id).copied()
    }

    /// Find an entry whose name or full name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&'static GazetteerEntry> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.ordered.iter().copied().find(|e| {
            e.name.to_lowercase() == needle || e.full_name.to_lowercase() == needle
        })
    }

    /// All entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = &'static GazetteerEntry> + '_ {
        self.ordered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Check that ids are unique and every sub-location's parent resolves to
    /// the entry it is listed under.
    pub fn validate(tables: &[&'static [GazetteerEntry]]) -> Result<(), GazetteerError> {
        let mut seen = HashSet::new();
        for entry in tables.iter().copied().flat_map(|t| t.iter()) {
            if !seen.insert(entry.id) {
                return Err(GazetteerError::DuplicateId(entry.id.to_string()));
            }
            for t in entry.terminals {
                if !seen.insert(t.id) {
                    return Err(GazetteerError::DuplicateId(t.id.to_string()));
                }
            }
        }

        let parents: HashSet<&str> = tables
            .iter()
            .flat_map(|t| t.iter())
            .map(|e| e.id)
            .collect();

        for entry in tables.iter().copied().flat_map(|t| t.iter()) {
            for t in entry.terminals {
                if !parents.contains(t.parent_location_id) {
                    return Err(GazetteerError::MissingParent {
                        child: t.id.to_string(),
                        parent: t.parent_location_id.to_string(),
                    });
                }
                if t.parent_location_id != entry.id {
                    return Err(GazetteerError::MismatchedParent {
                        child: t.id.to_string(),
                        listed_under: entry.id.to_string(),
                        parent: t.parent_location_id.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::uk()
    }
}
