// crates/bharat-core/src/model/convert.rs
use super::{District, IndiaLocations, State, Taluka, Village};
use crate::error::{GeoError, Result};
use crate::raw::{DistrictRaw, IndiaRaw, StateRaw, TalukaRaw, VillageRaw};

/// **Shape Validator:** Raw -> Tree.
///
/// Walks the raw document in source order and stops at the first node that
/// lacks a `code`, a `name` or its child array. Empty arrays are fine.
impl TryFrom<IndiaRaw> for IndiaLocations {
    type Error = GeoError;

    fn try_from(raw: IndiaRaw) -> Result<Self> {
        let states = require(raw.states, "$", "states")?
            .into_iter()
            .enumerate()
            .map(|(i, s)| state_from_raw(s, format!("states[{i}]")))
            .collect::<Result<Vec<_>>>()?;
        Ok(IndiaLocations { states })
    }
}

impl IndiaLocations {
    pub fn from_raw(raw: IndiaRaw) -> Result<Self> {
        Self::try_from(raw)
    }
}

fn state_from_raw(raw: StateRaw, path: String) -> Result<State> {
    let code = require(raw.code, &path, "code")?;
    let name = require(raw.name, &path, "name")?;
    let districts = require(raw.districts, &path, "districts")?
        .into_iter()
        .enumerate()
        .map(|(i, d)| district_from_raw(d, format!("{path}.districts[{i}]")))
        .collect::<Result<Vec<_>>>()?;
    Ok(State { code, name, districts })
}

fn district_from_raw(raw: DistrictRaw, path: String) -> Result<District> {
    let code = require(raw.code, &path, "code")?;
    let name = require(raw.name, &path, "name")?;
    let talukas = require(raw.talukas, &path, "talukas")?
        .into_iter()
        .enumerate()
        .map(|(i, t)| taluka_from_raw(t, format!("{path}.talukas[{i}]")))
        .collect::<Result<Vec<_>>>()?;
    Ok(District { code, name, talukas })
}

fn taluka_from_raw(raw: TalukaRaw, path: String) -> Result<Taluka> {
    let code = require(raw.code, &path, "code")?;
    let name = require(raw.name, &path, "name")?;
    let villages = require(raw.villages, &path, "villages")?
        .into_iter()
        .enumerate()
        .map(|(i, v)| village_from_raw(v, format!("{path}.villages[{i}]")))
        .collect::<Result<Vec<_>>>()?;
    Ok(Taluka { code, name, villages })
}

fn village_from_raw(raw: VillageRaw, path: String) -> Result<Village> {
    Ok(Village {
        code: require(raw.code, &path, "code")?,
        name: require(raw.name, &path, "name")?,
    })
}

fn require<T>(value: Option<T>, path: &str, field: &'static str) -> Result<T> {
    value.ok_or_else(|| GeoError::Shape {
        path: path.to_owned(),
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<IndiaLocations> {
        let raw: IndiaRaw = serde_json::from_str(json).expect("valid json");
        IndiaLocations::from_raw(raw)
    }

    #[test]
    fn accepts_well_formed_tree() {
        let tree = parse(
            r#"{"states":[{"code":"MH","name":"Maharashtra","districts":[
                {"code":"MUM","name":"Mumbai","talukas":[
                    {"code":"AND","name":"Andheri","villages":[{"code":"001","name":"Bandra"}]}
                ]}
            ]}]}"#,
        )
        .unwrap();
        assert_eq!(tree.states[0].districts[0].talukas[0].villages[0].name, "Bandra");
    }

    #[test]
    fn missing_villages_is_a_shape_error_with_position() {
        let err = parse(
            r#"{"states":[{"code":"MH","name":"Maharashtra","districts":[
                {"code":"MUM","name":"Mumbai","talukas":[
                    {"code":"AND","name":"Andheri","villages":[]},
                    {"code":"BOR","name":"Borivali"}
                ]}
            ]}]}"#,
        )
        .unwrap_err();
        match err {
            GeoError::Shape { path, field } => {
                assert_eq!(path, "states[0].districts[0].talukas[1]");
                assert_eq!(field, "villages");
            }
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn missing_root_states_is_a_shape_error() {
        let err = parse(r#"{"data":[]}"#).unwrap_err();
        assert!(matches!(err, GeoError::Shape { field: "states", .. }));
    }

    #[test]
    fn village_without_name_is_rejected() {
        let err = parse(
            r#"{"states":[{"code":"GA","name":"Goa","districts":[
                {"code":"N","name":"North Goa","talukas":[
                    {"code":"B","name":"Bardez","villages":[{"code":"9"}]}
                ]}
            ]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GeoError::Shape { ref path, field: "name" } if path == "states[0].districts[0].talukas[0].villages[0]"
        ));
    }
}
