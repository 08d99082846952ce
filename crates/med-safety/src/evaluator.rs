//! Medication safety evaluation
//!
//! Runs a prescription candidate through four ordered checks against the
//! patient chart:
//!
//! 1. Drug-drug interactions with the active medication list
//! 2. Allergy alerts and cross-reactivity families
//! 3. Age- and weight-based dosing cautions
//! 4. Condition contraindications
//!
//! Findings come back concatenated in check order. [`evaluate_report`]
//! wraps the list with a worst-severity [`SafetyAssessment`] rollup.
//! Duplicate-therapy detection runs as a separate pass
//! ([`check_duplicate_therapy`]) and reports [`TherapyDuplication`]
//! records rather than findings.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::PatientContext;
use crate::finding::{
    FindingKind, SafetyAssessment, SafetyFinding, Severity, TherapyDuplication,
};
use crate::tables::{
    CONTRAINDICATIONS, CROSS_REACTIVITY, GERIATRIC_CAUTION, INTERACTION_RULES, PEDIATRIC_CAUTION,
    THERAPEUTIC_CLASSES,
};

/// Case-insensitive substring containment, the matching primitive behind
/// every rule table. "Warfarin 5mg daily" matches the key "warfarin"; a
/// product name that merely embeds a key (for example "aspirin" inside a
/// combination-product string) matches too, so a rule hit is a prompt for
/// clinician review, not a verdict.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ============================================================================
// INDIVIDUAL CHECKS
// ============================================================================

/// Check the candidate against the active medication list for known
/// drug-drug interactions. A rule matches with the candidate on either
/// side of the pair, and every medication that contains the paired drug
/// produces its own finding, without deduplication.
pub fn check_interactions(candidate: &str, medications: &[String]) -> Vec<SafetyFinding> {
    let mut findings = Vec::new();
    for rule in INTERACTION_RULES {
        let paired = if contains_ci(candidate, rule.drug_a) {
            rule.drug_b
        } else if contains_ci(candidate, rule.drug_b) {
            rule.drug_a
        } else {
            continue;
        };
        for medication in medications {
            if contains_ci(medication, paired) {
                findings.push(SafetyFinding {
                    kind: FindingKind::Interaction,
                    severity: rule.severity,
                    description: format!(
                        "{} interacts with {}. {}",
                        candidate, medication, rule.description
                    ),
                    recommendation: rule.recommendation.to_string(),
                    category: "Drug Interaction".to_string(),
                });
            }
        }
    }
    findings
}

/// Check the candidate against recorded allergies. A direct match is a
/// critical alert; a match through a cross-reactivity family is major.
/// The two sub-checks run independently, so one allergy can produce both.
pub fn check_allergies(candidate: &str, allergies: &[String]) -> Vec<SafetyFinding> {
    let mut findings = Vec::new();
    for allergy in allergies {
        let allergy = allergy.trim();
        // A blank allergy entry would match every candidate through the
        // empty substring.
        if allergy.is_empty() {
            continue;
        }
        if contains_ci(candidate, allergy) {
            findings.push(SafetyFinding {
                kind: FindingKind::Allergy,
                severity: Severity::Critical,
                description: format!("Patient has a recorded allergy to {}.", allergy),
                recommendation: "DO NOT PRESCRIBE".to_string(),
                category: "Allergy Alert".to_string(),
            });
        }
        for family in CROSS_REACTIVITY {
            if !contains_ci(allergy, family.allergen) {
                continue;
            }
            for related in family.related {
                if contains_ci(candidate, related) {
                    findings.push(SafetyFinding {
                        kind: FindingKind::CrossReactivity,
                        severity: Severity::Major,
                        description: format!(
                            "Possible cross-reactivity between {} and the recorded {} allergy. {}",
                            related, allergy, family.note
                        ),
                        recommendation:
                            "Avoid if possible; confirm tolerance history before the first dose."
                                .to_string(),
                        category: "Cross-Reactivity".to_string(),
                    });
                }
            }
        }
    }
    findings
}

/// Age- and weight-based dosing cautions. Geriatric cautions apply above
/// age 65, pediatric cautions below age 18; a recorded weight under 50kg
/// adds one generic caution independent of the candidate tables.
pub fn check_dosing(candidate: &str, context: &PatientContext) -> Vec<SafetyFinding> {
    let mut findings = Vec::new();
    if let Some(age) = context.age {
        if age > 65 {
            for caution in GERIATRIC_CAUTION {
                if contains_ci(candidate, caution.drug) {
                    findings.push(SafetyFinding {
                        kind: FindingKind::Dosing,
                        severity: Severity::Moderate,
                        description: caution.reason.to_string(),
                        recommendation: caution.recommendation.to_string(),
                        category: "Geriatric Dosing".to_string(),
                    });
                }
            }
        } else if age < 18 {
            for caution in PEDIATRIC_CAUTION {
                if contains_ci(candidate, caution.drug) {
                    findings.push(SafetyFinding {
                        kind: FindingKind::Dosing,
                        severity: Severity::Moderate,
                        description: caution.reason.to_string(),
                        recommendation: caution.recommendation.to_string(),
                        category: "Pediatric Dosing".to_string(),
                    });
                }
            }
        }
    }
    if let Some(weight) = context.weight_kg {
        if weight > 0.0 && weight < 50.0 {
            findings.push(SafetyFinding {
                kind: FindingKind::Dosing,
                severity: Severity::Moderate,
                description: format!(
                    "Recorded weight {}kg is under 50kg; standard adult dosing may be excessive.",
                    weight
                ),
                recommendation: "Verify weight-based dosing before prescribing.".to_string(),
                category: "Weight-Based Dosing".to_string(),
            });
        }
    }
    findings
}

/// Check the candidate against the patient's problem list for condition
/// contraindications. Every recorded condition that lands in a matching
/// rule's condition list produces its own critical finding.
pub fn check_contraindications(candidate: &str, conditions: &[String]) -> Vec<SafetyFinding> {
    let mut findings = Vec::new();
    for rule in CONTRAINDICATIONS {
        if !contains_ci(candidate, rule.drug) {
            continue;
        }
        for condition in conditions {
            let matched = rule
                .conditions
                .iter()
                .any(|phrase| contains_ci(condition, phrase));
            if matched {
                findings.push(SafetyFinding {
                    kind: FindingKind::Contraindication,
                    severity: Severity::Critical,
                    description: format!(
                        "Contraindicated with {}: {}",
                        condition.trim(),
                        rule.reason
                    ),
                    recommendation: "DO NOT PRESCRIBE".to_string(),
                    category: "Contraindication".to_string(),
                });
            }
        }
    }
    findings
}

/// Report candidates that share a therapeutic class with a medication the
/// patient already takes. One record per (class, existing medication) pair.
pub fn check_duplicate_therapy(candidate: &str, medications: &[String]) -> Vec<TherapyDuplication> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return Vec::new();
    }
    let mut duplications = Vec::new();
    for class in THERAPEUTIC_CLASSES {
        if !class.members.iter().any(|m| contains_ci(candidate, m)) {
            continue;
        }
        for medication in medications {
            if medication.trim().is_empty() {
                continue;
            }
            if class.members.iter().any(|m| contains_ci(medication, m)) {
                duplications.push(TherapyDuplication {
                    class_name: class.name.to_string(),
                    candidate: candidate.to_string(),
                    existing: medication.clone(),
                    recommendation: class.recommendation.to_string(),
                });
            }
        }
    }
    duplications
}

// ============================================================================
// EVALUATION ENTRY POINTS
// ============================================================================

/// Run all four checks against the chart and concatenate their findings
/// in check order. A blank candidate produces no findings.
pub fn evaluate(candidate: &str, context: &PatientContext) -> Vec<SafetyFinding> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return Vec::new();
    }
    let mut findings = check_interactions(candidate, &context.medications);
    findings.extend(check_allergies(candidate, &context.allergies));
    findings.extend(check_dosing(candidate, context));
    findings.extend(check_contraindications(candidate, &context.conditions));
    debug!(
        candidate,
        findings = findings.len(),
        "medication safety evaluation complete"
    );
    findings
}

/// Evaluation result with the worst-severity rollup attached.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SafetyReport {
    pub candidate: String,
    pub findings: Vec<SafetyFinding>,
    pub assessment: SafetyAssessment,
}

/// Evaluate a candidate and wrap the findings in a [`SafetyReport`].
pub fn evaluate_report(candidate: &str, context: &PatientContext) -> SafetyReport {
    let findings = evaluate(candidate, context);
    let assessment = SafetyAssessment::from_findings(&findings);
    if assessment.is_blocking() {
        warn!(candidate, "prescription candidate is contraindicated for this patient");
    }
    SafetyReport {
        candidate: candidate.trim().to_string(),
        findings,
        assessment,
    }
}
