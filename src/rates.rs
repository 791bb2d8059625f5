//! Base rates and location multipliers
//!
//! Both tables are plain data. The built-in values are used unless a
//! configuration file supplies replacements at startup; either way they are
//! never mutated after construction.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;

/// Multiplier applied to locations that are not in the table
pub const FALLBACK_MULTIPLIER: f64 = 1.0;

/// Built-in location table, in display order
const DEFAULT_LOCATIONS: [(&str, f64); 8] = [
    ("Mumbai", 1.3),
    ("Delhi", 1.2),
    ("Bangalore", 1.25),
    ("Chennai", 1.15),
    ("Hyderabad", 1.1),
    ("Pune", 1.2),
    ("Kolkata", 1.05),
    ("Other", 1.0),
];

/// Cost per square foot for each category
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RateTable {
    pub material: f64,
    pub labour: f64,
    pub transportation: f64,
    pub overhead: f64,
}

impl RateTable {
    pub const fn builtin() -> Self {
        Self {
            material: 3000.0,
            labour: 1500.0,
            transportation: 300.0,
            overhead: 200.0,
        }
    }

    /// Highest of the four rates
    pub fn max_rate(&self) -> f64 {
        self.material
            .max(self.labour)
            .max(self.transportation)
            .max(self.overhead)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("material", self.material),
            ("labour", self.labour),
            ("transportation", self.transportation),
            ("overhead", self.overhead),
        ];

        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }

        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// One row of the location table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationEntry {
    pub name: String,
    pub multiplier: f64,
}

/// Ordered location name -> multiplier table
///
/// Lookup is exact and case-sensitive. Names that are absent resolve to
/// [`FALLBACK_MULTIPLIER`]; "Other" is an ordinary entry that happens to
/// carry the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationMultipliers {
    entries: Vec<LocationEntry>,
}

impl LocationMultipliers {
    /// Build a table from configured entries, keeping their order
    pub fn new(entries: Vec<LocationEntry>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::EmptyLocationName);
            }
            if !entry.multiplier.is_finite() || entry.multiplier <= 0.0 {
                return Err(ConfigError::InvalidMultiplier {
                    location: entry.name.clone(),
                    value: entry.multiplier,
                });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateLocation(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Multiplier for a known location, without fallback
    pub fn get(&self, location: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.name == location)
            .map(|e| e.multiplier)
    }

    /// Multiplier for `location`, or the neutral fallback when unknown
    pub fn multiplier_for(&self, location: &str) -> f64 {
        match self.get(location) {
            Some(multiplier) => multiplier,
            None => {
                tracing::debug!(
                    location = %location,
                    fallback = FALLBACK_MULTIPLIER,
                    "Unknown location, using fallback multiplier"
                );
                FALLBACK_MULTIPLIER
            }
        }
    }

    /// Highest multiplier in the table, 0.0 when empty
    pub fn max_multiplier(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.multiplier)
            .fold(0.0, f64::max)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocationMultipliers {
    fn default() -> Self {
        Self {
            entries: default_location_entries(),
        }
    }
}

pub fn default_location_entries() -> Vec<LocationEntry> {
    DEFAULT_LOCATIONS
        .iter()
        .map(|(name, multiplier)| LocationEntry {
            name: (*name).to_string(),
            multiplier: *multiplier,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rates() {
        let rates = RateTable::default();
        assert_eq!(rates.material, 3000.0);
        assert_eq!(rates.labour, 1500.0);
        assert_eq!(rates.transportation, 300.0);
        assert_eq!(rates.overhead, 200.0);
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_known_location_multiplier() {
        let table = LocationMultipliers::default();
        assert_eq!(table.multiplier_for("Mumbai"), 1.3);
        assert_eq!(table.multiplier_for("Bangalore"), 1.25);
        assert_eq!(table.multiplier_for("Kolkata"), 1.05);
    }

    #[test]
    fn test_unknown_location_falls_back() {
        let table = LocationMultipliers::default();
        assert_eq!(table.get("Atlantis"), None);
        assert_eq!(table.multiplier_for("Atlantis"), FALLBACK_MULTIPLIER);
        // Lookup is case-sensitive
        assert_eq!(table.get("mumbai"), None);
    }

    #[test]
    fn test_other_is_a_real_entry() {
        let table = LocationMultipliers::default();
        assert_eq!(table.get("Other"), Some(1.0));
    }

    #[test]
    fn test_display_order_is_preserved() {
        let table = LocationMultipliers::default();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(
            names,
            vec!["Mumbai", "Delhi", "Bangalore", "Chennai", "Hyderabad", "Pune", "Kolkata", "Other"]
        );
    }

    #[test]
    fn test_maxima() {
        assert_eq!(RateTable::default().max_rate(), 3000.0);
        assert_eq!(LocationMultipliers::default().max_multiplier(), 1.3);
        assert_eq!(LocationMultipliers::new(Vec::new()).unwrap().max_multiplier(), 0.0);
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let result = LocationMultipliers::new(vec![LocationEntry {
            name: "Nowhere".to_string(),
            multiplier: 0.0,
        }]);
        assert!(matches!(result, Err(ConfigError::InvalidMultiplier { .. })));
    }

    #[test]
    fn test_rejects_duplicate_and_blank_names() {
        let dup = LocationMultipliers::new(vec![
            LocationEntry { name: "Pune".to_string(), multiplier: 1.2 },
            LocationEntry { name: "Pune".to_string(), multiplier: 1.1 },
        ]);
        assert!(matches!(dup, Err(ConfigError::DuplicateLocation(name)) if name == "Pune"));

        let blank = LocationMultipliers::new(vec![LocationEntry {
            name: "  ".to_string(),
            multiplier: 1.0,
        }]);
        assert!(matches!(blank, Err(ConfigError::EmptyLocationName)));
    }

    #[test]
    fn test_rejects_negative_rate() {
        let rates = RateTable {
            overhead: -1.0,
            ..RateTable::default()
        };
        let err = rates.validate().unwrap_err();
        assert!(err.to_string().contains("overhead"));
    }
}
