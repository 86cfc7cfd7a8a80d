/// Aggregate counts over a location tree or one of its states.
///
/// Counts are plain sums, so per-state values can be added up in any order
/// to obtain the global figures written to `stats.json`.
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCounts {
    pub states: usize,
    pub districts: usize,
    pub talukas: usize,
    pub villages: usize,
}

impl Add for LocationCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        LocationCounts {
            states: self.states + rhs.states,
            districts: self.districts + rhs.districts,
            talukas: self.talukas + rhs.talukas,
            villages: self.villages + rhs.villages,
        }
    }
}

impl AddAssign for LocationCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for LocationCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(LocationCounts::default(), Add::add)
    }
}
