// crates/bharat-core/src/record.rs
use crate::code::CodeStrategy;
use crate::model::VillageContext;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Separator between names in [`FlattenedLocationRecord::full_path`].
pub const PATH_SEPARATOR: &str = " > ";

/// The ancestry of one village, borrowed from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationPath<'a> {
    pub state_name: &'a str,
    pub state_code: &'a str,
    pub district_name: &'a str,
    pub district_code: &'a str,
    pub taluka_name: &'a str,
    pub taluka_code: &'a str,
    pub village_name: &'a str,
    pub village_code: &'a str,
}

impl<'a> From<VillageContext<'a>> for LocationPath<'a> {
    fn from((village, taluka, district, state): VillageContext<'a>) -> Self {
        LocationPath {
            state_name: &state.name,
            state_code: &state.code,
            district_name: &district.name,
            district_code: &district.code,
            taluka_name: &taluka.name,
            taluka_code: &taluka.code,
            village_name: &village.name,
            village_code: &village.code,
        }
    }
}

impl LocationPath<'_> {
    pub fn names(&self) -> [&str; 4] {
        [
            self.state_name,
            self.district_name,
            self.taluka_name,
            self.village_name,
        ]
    }

    /// `"Maharashtra > Mumbai > Andheri > Bandra"`
    pub fn full_path(&self) -> String {
        self.names().join(PATH_SEPARATOR)
    }

    /// Space-joined, lowercased names.
    pub fn search_text(&self) -> String {
        self.names().join(" ").to_lowercase()
    }
}

/// One village with copies of all its ancestors' names and codes.
///
/// This is the record type of the `search/<letter>.json` buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedLocationRecord {
    pub state_name: String,
    pub state_code: String,
    pub district_name: String,
    pub district_code: String,
    pub taluka_name: String,
    pub taluka_code: String,
    pub village_name: String,
    pub village_code: String,
    pub unique_code: String,
    pub full_path: String,
    pub search_text: String,
}

impl FlattenedLocationRecord {
    pub fn new(path: &LocationPath<'_>, strategy: &CodeStrategy) -> Self {
        Self::with_code(path, strategy.unique_code(path))
    }

    pub(crate) fn with_code(path: &LocationPath<'_>, unique_code: String) -> Self {
        FlattenedLocationRecord {
            state_name: path.state_name.to_owned(),
            state_code: path.state_code.to_owned(),
            district_name: path.district_name.to_owned(),
            district_code: path.district_code.to_owned(),
            taluka_name: path.taluka_name.to_owned(),
            taluka_code: path.taluka_code.to_owned(),
            village_name: path.village_name.to_owned(),
            village_code: path.village_code.to_owned(),
            unique_code,
            full_path: path.full_path(),
            search_text: path.search_text(),
        }
    }

    pub fn path(&self) -> LocationPath<'_> {
        LocationPath {
            state_name: &self.state_name,
            state_code: &self.state_code,
            district_name: &self.district_name,
            district_code: &self.district_code,
            taluka_name: &self.taluka_name,
            taluka_code: &self.taluka_code,
            village_name: &self.village_name,
            village_code: &self.village_code,
        }
    }

    /// Splits `full_path` back into `[state, district, taluka, village]`.
    pub fn path_segments(&self) -> Vec<&str> {
        self.full_path.split(PATH_SEPARATOR).collect()
    }
}

/// A hand-entered location without official codes.
///
/// Drafts are turned into records with [`CodeStrategy::RandomSuffix`]; they
/// never go through the static-API build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDraft {
    pub state_name: String,
    pub district_name: String,
    pub taluka_name: String,
    pub village_name: String,
    #[serde(default)]
    pub state_code: String,
    #[serde(default)]
    pub district_code: String,
    #[serde(default)]
    pub taluka_code: String,
    #[serde(default)]
    pub village_code: String,
}

impl LocationDraft {
    fn path(&self) -> LocationPath<'_> {
        LocationPath {
            state_name: &self.state_name,
            state_code: &self.state_code,
            district_name: &self.district_name,
            district_code: &self.district_code,
            taluka_name: &self.taluka_name,
            taluka_code: &self.taluka_code,
            village_name: &self.village_name,
            village_code: &self.village_code,
        }
    }

    pub fn to_record(&self) -> FlattenedLocationRecord {
        FlattenedLocationRecord::new(&self.path(), &CodeStrategy::RandomSuffix)
    }

    pub fn to_record_with<R: Rng + ?Sized>(&self, rng: &mut R) -> FlattenedLocationRecord {
        let path = self.path();
        let code = CodeStrategy::RandomSuffix.unique_code_with(&path, rng);
        FlattenedLocationRecord::with_code(&path, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PATH: LocationPath<'static> = LocationPath {
        state_name: "Maharashtra",
        state_code: "MH",
        district_name: "Mumbai",
        district_code: "MUM",
        taluka_name: "Andheri",
        taluka_code: "AND",
        village_name: "Bandra",
        village_code: "001",
    };

    #[test]
    fn record_carries_derived_fields() {
        let r = FlattenedLocationRecord::new(&PATH, &CodeStrategy::Deterministic);
        assert_eq!(r.unique_code, "MH-MUM-AND-001");
        assert_eq!(r.full_path, "Maharashtra > Mumbai > Andheri > Bandra");
        assert_eq!(r.search_text, "maharashtra mumbai andheri bandra");
        assert_eq!(r.path_segments(), PATH.names());
        assert_eq!(r.path(), PATH);
    }

    #[test]
    fn record_serializes_camel_case_in_field_order() {
        let r = FlattenedLocationRecord::new(&PATH, &CodeStrategy::Deterministic);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.starts_with(r#"{"stateName":"Maharashtra","stateCode":"MH","districtName""#));
        assert!(json.ends_with(r#""searchText":"maharashtra mumbai andheri bandra"}"#));
    }

    #[test]
    fn draft_gets_random_suffix_code() {
        let draft = LocationDraft {
            state_name: "Goa".into(),
            district_name: "North Goa".into(),
            taluka_name: "Bardez".into(),
            village_name: "Anjuna".into(),
            ..Default::default()
        };
        let r = draft.to_record();
        assert!(r.unique_code.starts_with("GO-NOR-ANJ-"), "{}", r.unique_code);
        assert_eq!(r.full_path, "Goa > North Goa > Bardez > Anjuna");

        let suffix: u16 = StdRng::seed_from_u64(11).gen();
        let seeded = draft.to_record_with(&mut StdRng::seed_from_u64(11));
        assert_eq!(seeded.unique_code, format!("GO-NOR-ANJ-{suffix:04X}"));
        assert_eq!(seeded.search_text, "goa north goa bardez anjuna");
    }
}
