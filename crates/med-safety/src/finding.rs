//! Safety-check result types
//!
//! Findings are immutable value objects: created by one evaluation call,
//! aggregated into lists, owned by the caller, never mutated. Severity is
//! ordinal so finding lists can be rolled up into a single assessment.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Ordinal severity of a finding. Declaration order is ascending, so
/// `Moderate < Major < Critical` holds under the derived ordering.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[display(fmt = "moderate")]
    Moderate,
    #[display(fmt = "major")]
    Major,
    #[display(fmt = "critical")]
    Critical,
}

/// Which check produced a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    #[display(fmt = "interaction")]
    Interaction,
    #[display(fmt = "allergy")]
    Allergy,
    #[display(fmt = "cross_reactivity")]
    CrossReactivity,
    #[display(fmt = "dosing")]
    Dosing,
    #[display(fmt = "contraindication")]
    Contraindication,
}

/// One structured safety-check result.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SafetyFinding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
    /// Display grouping for the prescribing screen ("Drug Interaction",
    /// "Allergy Alert", ...).
    pub category: String,
}

/// Findings grouped by severity. A pure projection of a finding list;
/// relative order within each bucket follows the input list.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SeverityPartition {
    pub critical: Vec<SafetyFinding>,
    pub major: Vec<SafetyFinding>,
    pub moderate: Vec<SafetyFinding>,
}

impl SeverityPartition {
    pub fn from_findings(findings: &[SafetyFinding]) -> Self {
        let mut partition = SeverityPartition::default();
        for finding in findings {
            match finding.severity {
                Severity::Critical => partition.critical.push(finding.clone()),
                Severity::Major => partition.major.push(finding.clone()),
                Severity::Moderate => partition.moderate.push(finding.clone()),
            }
        }
        partition
    }

    pub fn total(&self) -> usize {
        self.critical.len() + self.major.len() + self.moderate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn worst(&self) -> Option<Severity> {
        if !self.critical.is_empty() {
            Some(Severity::Critical)
        } else if !self.major.is_empty() {
            Some(Severity::Major)
        } else if !self.moderate.is_empty() {
            Some(Severity::Moderate)
        } else {
            None
        }
    }
}

/// Worst-severity rollup of a finding list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum SafetyAssessment {
    #[display(fmt = "safe")]
    Safe,
    #[display(fmt = "caution recommended")]
    CautionRecommended,
    #[display(fmt = "high risk")]
    HighRisk,
    #[display(fmt = "contraindicated")]
    Contraindicated,
}

impl SafetyAssessment {
    pub fn from_findings(findings: &[SafetyFinding]) -> SafetyAssessment {
        match findings.iter().map(|f| f.severity).max() {
            Some(Severity::Critical) => SafetyAssessment::Contraindicated,
            Some(Severity::Major) => SafetyAssessment::HighRisk,
            Some(Severity::Moderate) => SafetyAssessment::CautionRecommended,
            None => SafetyAssessment::Safe,
        }
    }

    /// Whether prescribing should be blocked outright.
    pub fn is_blocking(&self) -> bool {
        matches!(self, SafetyAssessment::Contraindicated)
    }
}

/// A candidate medication sharing a therapeutic class with a medication
/// the patient already takes. Reported by the duplicate-therapy check,
/// separately from the four core checks.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TherapyDuplication {
    pub class_name: String,
    pub candidate: String,
    pub existing: String,
    pub recommendation: String,
}
