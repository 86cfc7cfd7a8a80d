// crates/bharat-core/src/model/mod.rs
pub mod convert;

use crate::common::LocationCounts;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// # The Location Tree
///
/// The validated, in-memory form of the source document. It is built once
/// per run by the loader and never mutated afterwards.
///
/// **Structure:** `IndiaLocations` -> `Vec<State>` -> `Vec<District>` -> `Vec<Taluka>` -> `Vec<Village>`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndiaLocations {
    pub states: Vec<State>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub code: String,
    pub name: String,
    pub districts: Vec<District>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub code: String,
    pub name: String,
    pub talukas: Vec<Taluka>,
}

/// Sub-district unit; the parent of villages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taluka {
    pub code: String,
    pub name: String,
    pub villages: Vec<Village>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Village {
    pub code: String,
    pub name: String,
}

/// A village together with its taluka, district and state.
pub type VillageContext<'a> = (&'a Village, &'a Taluka, &'a District, &'a State);

/// Iterator over every village of the tree in source order.
pub type VillagesIter<'a> = Box<dyn Iterator<Item = VillageContext<'a>> + 'a>;

impl IndiaLocations {
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Every village with its ancestors, depth-first in insertion order.
    pub fn villages(&self) -> VillagesIter<'_> {
        Box::new(self.states.iter().flat_map(|s| {
            s.districts.iter().flat_map(move |d| {
                d.talukas
                    .iter()
                    .flat_map(move |t| t.villages.iter().map(move |v| (v, t, d, s)))
            })
        }))
    }

    /// Find a state by code (exact, case-insensitive) or by name (folded).
    pub fn find_state(&self, name_or_code: &str) -> Option<&State> {
        let q = name_or_code.trim();
        self.states
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(q))
            .or_else(|| self.states.iter().find(|s| s.is_named(q)))
    }

    /// Aggregate counts over the whole tree.
    pub fn counts(&self) -> LocationCounts {
        self.states.iter().map(State::counts).sum()
    }
}

impl State {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn find_district(&self, name: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.is_named(name))
    }

    /// Counts for this state alone; `states` is always 1.
    pub fn counts(&self) -> LocationCounts {
        let talukas = self.districts.iter().map(|d| d.talukas.len()).sum();
        let villages = self
            .districts
            .iter()
            .flat_map(|d| &d.talukas)
            .map(|t| t.villages.len())
            .sum();
        LocationCounts {
            states: 1,
            districts: self.districts.len(),
            talukas,
            villages,
        }
    }
}

impl District {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn talukas(&self) -> &[Taluka] {
        &self.talukas
    }

    pub fn find_taluka(&self, name: &str) -> Option<&Taluka> {
        self.talukas.iter().find(|t| t.is_named(name))
    }
}

impl Taluka {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn villages(&self) -> &[Village] {
        &self.villages
    }
}

impl Village {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl NameMatch for State {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for District {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Taluka {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Village {
    fn name_str(&self) -> &str {
        &self.name
    }
}
