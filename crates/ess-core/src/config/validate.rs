//! Semantic checks on a loaded configuration.
//!
//! Validation observes and never enforces: violations are returned to the
//! caller for logging, and the offending values stay in effect until an
//! operator edits the document.

use std::fmt;

use super::schema::{EssConfig, VehicleFeaturesSettings};

/// One failed semantic constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path of the offending field.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid config: {} {}", self.field, self.message)
    }
}

/// Types that can check their own semantic constraints.
pub trait Validatable {
    /// Returns every violated constraint; empty when valid.
    fn validate(&self) -> Vec<Violation>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for EssConfig {
    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        violations.extend(self.vehicle_features.validate());
        violations
    }
}

impl Validatable for VehicleFeaturesSettings {
    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        check_positive(&mut violations, "VehicleFeatures.RefuelPercentage", self.refuel_percentage);
        check_positive(&mut violations, "VehicleFeatures.RepairPercentage", self.repair_percentage);
        violations
    }
}

fn check_positive(violations: &mut Vec<Violation>, field: &str, value: i32) {
    if value <= 0 {
        violations.push(Violation {
            field: field.to_string(),
            message: format!("must be positive. (Got {value})"),
        });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
