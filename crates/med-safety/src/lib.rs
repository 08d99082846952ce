//! Sanare Med Safety - Clinical Safety Rule Engine
//!
//! Deterministic prescribing checks evaluated against a snapshot of the
//! patient chart. Every entry point is a pure function: same candidate and
//! chart in, same findings out, no I/O and no external lookups.
//!
//! # Features
//!
//! - **Drug interactions**: candidate vs. active medication list, both
//!   orientations of each rule pair
//! - **Allergy alerts**: direct matches plus cross-reactivity families
//!   (penicillins, sulfonamides, NSAIDs, opioids)
//! - **Dosing cautions**: geriatric and pediatric drug tables plus a
//!   low-body-weight caution
//! - **Contraindications**: condition-based blocks with a DO NOT PRESCRIBE
//!   recommendation
//! - **Duplicate therapy**: same-class overlap reported separately from
//!   the blocking checks
//!
//! # Example
//!
//! ```
//! use sanare_med_safety::{evaluate_report, PatientContext, SafetyAssessment, Severity};
//!
//! let chart = PatientContext::new()
//!     .with_medications(["Aspirin 81mg"])
//!     .with_age(72);
//!
//! let report = evaluate_report("Warfarin 5mg", &chart);
//! assert_eq!(report.assessment, SafetyAssessment::HighRisk);
//! assert_eq!(report.findings.len(), 1);
//! assert_eq!(report.findings[0].severity, Severity::Major);
//! ```

pub mod context;
pub mod evaluator;
pub mod finding;

mod tables;

// Re-export commonly used types for convenience
pub use context::PatientContext;
pub use evaluator::{
    check_allergies, check_contraindications, check_dosing, check_duplicate_therapy,
    check_interactions, evaluate, evaluate_report, SafetyReport,
};
pub use finding::{
    FindingKind, SafetyAssessment, SafetyFinding, Severity, SeverityPartition, TherapyDuplication,
};
