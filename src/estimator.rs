use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EstimateError;
use crate::rates::{LocationMultipliers, RateTable, FALLBACK_MULTIPLIER};

/// Square feet covered by one month of construction
pub const AREA_PER_MONTH: f64 = 500.0;

/// Square feet handled by one worker
pub const AREA_PER_WORKER: f64 = 250.0;

/// Largest integer an f64 holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Severity of a project risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Risk {
    pub title: &'static str,
    pub severity: Severity,
    pub description: &'static str,
}

/// Risk notes attached to every estimate, independent of inputs
pub const RISK_ANALYSIS: [Risk; 4] = [
    Risk {
        title: "Material Price Volatility",
        severity: Severity::Medium,
        description: "Potential fluctuations in material costs could impact budget",
    },
    Risk {
        title: "Labour Availability",
        severity: Severity::Low,
        description: "Skilled labour might be challenging to source consistently",
    },
    Risk {
        title: "Regulatory Compliance",
        severity: Severity::High,
        description: "Local building codes and permits may cause delays",
    },
    Risk {
        title: "Weather Disruptions",
        severity: Severity::Medium,
        description: "Seasonal changes could potentially extend project timeline",
    },
];

/// Per-category costs, each floored independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub material_cost: u64,
    pub labour_cost: u64,
    pub transportation_cost: u64,
    pub overhead_cost: u64,
}

impl CostBreakdown {
    /// Sum of the four categories, `None` on overflow
    pub fn checked_total(&self) -> Option<u64> {
        self.material_cost
            .checked_add(self.labour_cost)?
            .checked_add(self.transportation_cost)?
            .checked_add(self.overhead_cost)
    }
}

/// Complete output of one estimation call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub total_cost: u64,
    pub cost_breakdown: CostBreakdown,
    /// Months
    pub construction_time: u64,
    /// Workers
    pub labour_required: u64,
    pub risk_analysis: Vec<Risk>,
}

/// Estimator bound to a rate table and location table
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    rates: RateTable,
    locations: LocationMultipliers,
}

impl Estimator {
    pub fn new(rates: RateTable, locations: LocationMultipliers) -> Self {
        Self { rates, locations }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn locations(&self) -> &LocationMultipliers {
        &self.locations
    }

    /// Estimate cost, duration and labour for `area` square feet at `location`
    ///
    /// Unknown locations use the neutral multiplier. Each category is
    /// computed as `area * rate * multiplier` and floored on its own, so the
    /// total is a sum of floored values rather than a floored sum.
    pub fn estimate(&self, area: f64, location: &str) -> Result<EstimateResult, EstimateError> {
        self.check_area(area)?;

        let multiplier = self.locations.multiplier_for(location);

        let cost_breakdown = CostBreakdown {
            material_cost: category_cost(area, self.rates.material, multiplier),
            labour_cost: category_cost(area, self.rates.labour, multiplier),
            transportation_cost: category_cost(area, self.rates.transportation, multiplier),
            overhead_cost: category_cost(area, self.rates.overhead, multiplier),
        };

        let total_cost = cost_breakdown
            .checked_total()
            .ok_or(EstimateError::CostOverflow { area })?;

        let result = EstimateResult {
            total_cost,
            cost_breakdown,
            construction_time: (area / AREA_PER_MONTH).ceil() as u64,
            labour_required: (area / AREA_PER_WORKER).ceil() as u64,
            risk_analysis: RISK_ANALYSIS.to_vec(),
        };

        tracing::info!(
            area = area,
            location = %location,
            multiplier = multiplier,
            total_cost = result.total_cost,
            "Estimate computed"
        );

        Ok(result)
    }

    /// Check that `area` can be estimated at every location
    ///
    /// The largest product is `area * max rate * max multiplier`, with the
    /// fallback counted as a multiplier. Keeping it (and the area itself, which
    /// bounds the month and worker counts) at or below 2^53 means every
    /// category floors to an exact integer and the total cannot overflow.
    pub fn check_area(&self, area: f64) -> Result<(), EstimateError> {
        if !area.is_finite() || area <= 0.0 {
            return Err(EstimateError::InvalidArea { area });
        }

        let multiplier = self.locations.max_multiplier().max(FALLBACK_MULTIPLIER);
        let largest = area * self.rates.max_rate() * multiplier;
        if area > MAX_EXACT_INTEGER || largest > MAX_EXACT_INTEGER {
            return Err(EstimateError::CostOverflow { area });
        }

        Ok(())
    }
}

/// Estimate against the built-in tables
pub fn estimate(area: f64, location: &str) -> Result<EstimateResult, EstimateError> {
    Estimator::default().estimate(area, location)
}

/// Callers must have passed `check_area`
fn category_cost(area: f64, rate: f64, multiplier: f64) -> u64 {
    (area * rate * multiplier).floor() as u64
}
