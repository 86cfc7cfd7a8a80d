// crates/bharat-core/src/code.rs

//! Unique code synthesis.
//!
//! Two strategies exist and must not be mixed up:
//!
//! * [`CodeStrategy::Deterministic`] joins the four ancestor codes. The
//!   static-API build uses it exclusively, so identical input always yields
//!   identical output files.
//! * [`CodeStrategy::RandomSuffix`] abbreviates the ancestor *names* and
//!   appends four random hex digits. It is meant for records created by hand
//!   (see [`crate::record::LocationDraft`]), which have no official codes.
use crate::record::LocationPath;
use rand::Rng;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeStrategy {
    /// `{stateCode}-{districtCode}-{talukaCode}-{villageCode}`
    #[default]
    Deterministic,
    /// `ST-DIS-VIL-XXXX`
    RandomSuffix,
}

impl CodeStrategy {
    /// Synthesizes the code for `path`, drawing randomness from the thread RNG
    /// when the strategy needs it.
    pub fn unique_code(&self, path: &LocationPath<'_>) -> String {
        self.unique_code_with(path, &mut rand::thread_rng())
    }

    pub fn unique_code_with<R: Rng + ?Sized>(&self, path: &LocationPath<'_>, rng: &mut R) -> String {
        match self {
            CodeStrategy::Deterministic => composite_code(
                path.state_code,
                path.district_code,
                path.taluka_code,
                path.village_code,
            ),
            CodeStrategy::RandomSuffix => {
                let village = if path.village_name.is_empty() {
                    "GEN".to_owned()
                } else {
                    abbreviate(path.village_name, 3)
                };
                format!(
                    "{}-{}-{}-{:04X}",
                    abbreviate(path.state_name, 2),
                    abbreviate(path.district_name, 3),
                    village,
                    rng.gen::<u16>()
                )
            }
        }
    }

    /// Whether two runs over the same input produce the same codes.
    pub fn is_reproducible(&self) -> bool {
        matches!(self, CodeStrategy::Deterministic)
    }
}

/// The deterministic composite code.
///
/// ```rust
/// use bharat_core::code::composite_code;
///
/// assert_eq!(composite_code("MH", "MUM", "AND", "001"), "MH-MUM-AND-001");
/// ```
pub fn composite_code(state: &str, district: &str, taluka: &str, village: &str) -> String {
    format!("{state}-{district}-{taluka}-{village}")
}

/// `state_district_taluka_village`, lowercased, whitespace runs as `_`.
///
/// Empty taluka or village names are left out.
pub fn location_id(path: &LocationPath<'_>) -> String {
    [
        path.state_name,
        path.district_name,
        path.taluka_name,
        path.village_name,
    ]
    .iter()
    .filter(|s| !s.is_empty())
    .map(|s| s.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_"))
    .collect::<Vec<_>>()
    .join("_")
}

fn abbreviate(s: &str, n: usize) -> String {
    s.chars().take(n).collect::<String>().to_uppercase()
}
