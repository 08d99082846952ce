//! Patient snapshot consumed by the safety checks
//!
//! The evaluator works from a plain snapshot of the chart: current
//! medications, recorded allergies, demographics, and active conditions.
//! Every field is optional in spirit; a missing value disables the checks
//! that need it rather than failing evaluation.

use serde::{Deserialize, Serialize};

/// Patient state at prescribing time. Free-text fields carry whatever the
/// chart holds ("Aspirin 81mg daily", "severe kidney disease"); the checks
/// match them case-insensitively by substring.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatientContext {
    /// Active medication list, one entry per order.
    pub medications: Vec<String>,
    /// Recorded allergies, free text.
    pub allergies: Vec<String>,
    /// Age in whole years, when known.
    pub age: Option<u32>,
    /// Body weight in kilograms, when known.
    pub weight_kg: Option<f64>,
    /// Active problem list, free text.
    pub conditions: Vec<String>,
}

impl PatientContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_medications<I, S>(mut self, medications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medications = medications.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_allergies<I, S>(mut self, allergies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies = allergies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    pub fn with_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions = conditions.into_iter().map(Into::into).collect();
        self
    }
}
