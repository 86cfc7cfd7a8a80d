// crates/bharat-core/src/raw.rs

//! Raw source structures as they come from `india_locations.json`.
//!
//! Every field is optional so that a node with a missing child array
//! deserializes fine and is reported by shape validation with its exact
//! position, instead of surfacing as an opaque serde error.
use serde::Deserialize;

/// `{ "code": "001", "name": "Bandra" }`
#[derive(Debug, Deserialize)]
pub struct VillageRaw {
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TalukaRaw {
    pub code: Option<String>,
    pub name: Option<String>,
    pub villages: Option<Vec<VillageRaw>>,
}

#[derive(Debug, Deserialize)]
pub struct DistrictRaw {
    pub code: Option<String>,
    pub name: Option<String>,
    pub talukas: Option<Vec<TalukaRaw>>,
}

#[derive(Debug, Deserialize)]
pub struct StateRaw {
    pub code: Option<String>,
    pub name: Option<String>,
    pub districts: Option<Vec<DistrictRaw>>,
}

/// Root document: `{ "states": [...] }`.
#[derive(Debug, Deserialize)]
pub struct IndiaRaw {
    pub states: Option<Vec<StateRaw>>,
}
