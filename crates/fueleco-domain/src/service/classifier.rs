//! MPG vs. MPGe classification
//!
//! The notes field is the only signal: a record whose notes contain `FCV`
//! reports energy-equivalent figures. Stored integers are never changed, only
//! the unit label chosen for them.

use serde::{Deserialize, Serialize};
use std::fmt;

use fueleco_types::Vehicle;

/// Notes token marking a fuel-cell vehicle
pub const FCV_MARKER: &str = "FCV";

/// True iff the vehicle's notes contain the FCV token
pub fn is_equivalent_energy(vehicle: &Vehicle) -> bool {
    vehicle
        .notes
        .as_ref()
        .map(|n| n.contains(FCV_MARKER))
        .unwrap_or(false)
}

/// True iff any member of the group is an FCV.
///
/// One FCV variant relabels the whole group's averages.
pub fn group_is_equivalent_energy<'a, I>(vehicles: I) -> bool
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    vehicles.into_iter().any(is_equivalent_energy)
}

/// Unit in which economy figures are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EconomyUnit {
    /// Miles per gallon of petroleum fuel
    Mpg,
    /// Miles per gallon equivalent
    Mpge,
}

impl EconomyUnit {
    pub fn from_equivalent_energy(equivalent: bool) -> Self {
        if equivalent {
            EconomyUnit::Mpge
        } else {
            EconomyUnit::Mpg
        }
    }

    /// Unit for a single vehicle row
    pub fn for_vehicle(vehicle: &Vehicle) -> Self {
        Self::from_equivalent_energy(is_equivalent_energy(vehicle))
    }

    /// Unit for a group's averages (any-of)
    pub fn for_group<'a, I>(vehicles: I) -> Self
    where
        I: IntoIterator<Item = &'a Vehicle>,
    {
        Self::from_equivalent_energy(group_is_equivalent_energy(vehicles))
    }

    pub fn label(&self) -> &'static str {
        match self {
            EconomyUnit::Mpg => "MPG",
            EconomyUnit::Mpge => "MPG Equivalent (MPGe)",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            EconomyUnit::Mpg => "MPG",
            EconomyUnit::Mpge => "MPGe",
        }
    }
}

impl fmt::Display for EconomyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_notes(notes: Option<&str>) -> Vehicle {
        let v = Vehicle::new(2024, "Toyota", "Mirai", "XLE");
        match notes {
            Some(n) => v.with_notes(n),
            None => v,
        }
    }

    #[test]
    fn test_fcv_substring_anywhere() {
        assert!(is_equivalent_energy(&with_notes(Some("Hybrid FCV model"))));
        assert!(is_equivalent_energy(&with_notes(Some("FCV"))));
    }

    #[test]
    fn test_not_fcv() {
        assert!(!is_equivalent_energy(&with_notes(Some("Hybrid"))));
        assert!(!is_equivalent_energy(&with_notes(Some(""))));
        assert!(!is_equivalent_energy(&with_notes(None)));
    }

    #[test]
    fn test_token_is_case_sensitive() {
        assert!(!is_equivalent_energy(&with_notes(Some("fcv"))));
    }

    #[test]
    fn test_group_any_of() {
        let group = vec![with_notes(None), with_notes(Some("FCV"))];
        assert!(!is_equivalent_energy(&group[0]));
        assert!(group_is_equivalent_energy(&group));
    }

    #[test]
    fn test_group_none_match() {
        let group = vec![with_notes(None), with_notes(Some("Hybrid"))];
        assert!(!group_is_equivalent_energy(&group));
        assert!(!group_is_equivalent_energy(&Vec::<Vehicle>::new()));
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(EconomyUnit::for_vehicle(&with_notes(None)).label(), "MPG");
        assert_eq!(
            EconomyUnit::for_vehicle(&with_notes(Some("FCV"))).label(),
            "MPG Equivalent (MPGe)"
        );
        assert_eq!(EconomyUnit::Mpge.short_label(), "MPGe");
        assert_eq!(EconomyUnit::Mpg.to_string(), "MPG");
    }

    #[test]
    fn test_group_unit() {
        let group = vec![with_notes(Some("Hybrid")), with_notes(Some("FCV"))];
        assert_eq!(EconomyUnit::for_group(&group), EconomyUnit::Mpge);
    }
}
