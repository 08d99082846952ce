//! Clinical rule tables
//!
//! Static reference data behind the safety checks. Every matching key
//! (drug names, allergen families, condition phrases) is stored lowercase;
//! the evaluator lowercases chart text before comparing, so a mixed-case
//! key would never match. A unit test enforces the convention.
//!
//! The tables are a curated starter set, not a formulary. Rules follow the
//! same shape so adding one is a single-line edit.

use crate::finding::Severity;

// ============================================================================
// DRUG-DRUG INTERACTIONS
// ============================================================================

pub(crate) struct InteractionRule {
    pub drug_a: &'static str,
    pub drug_b: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub recommendation: &'static str,
}

pub(crate) static INTERACTION_RULES: &[InteractionRule] = &[
    InteractionRule {
        drug_a: "warfarin",
        drug_b: "aspirin",
        severity: Severity::Major,
        description: "Combined anticoagulant and antiplatelet effect significantly raises bleeding risk.",
        recommendation: "Avoid the combination where possible; if unavoidable, monitor INR closely and watch for signs of bleeding.",
    },
    InteractionRule {
        drug_a: "warfarin",
        drug_b: "ibuprofen",
        severity: Severity::Major,
        description: "NSAIDs impair platelet function and add GI bleeding risk on top of anticoagulation.",
        recommendation: "Prefer acetaminophen for analgesia; monitor INR if an NSAID is required.",
    },
    InteractionRule {
        drug_a: "warfarin",
        drug_b: "amiodarone",
        severity: Severity::Major,
        description: "Amiodarone inhibits warfarin metabolism and can sharply raise INR.",
        recommendation: "Reduce the warfarin dose and recheck INR within one week of starting amiodarone.",
    },
    InteractionRule {
        drug_a: "warfarin",
        drug_b: "fluconazole",
        severity: Severity::Major,
        description: "Azole antifungals inhibit CYP2C9 and potentiate warfarin effect.",
        recommendation: "Monitor INR during and after the antifungal course; anticipate a dose reduction.",
    },
    InteractionRule {
        drug_a: "lisinopril",
        drug_b: "spironolactone",
        severity: Severity::Major,
        description: "ACE inhibition combined with a potassium-sparing diuretic can cause hyperkalemia.",
        recommendation: "Check serum potassium within one week of starting the combination.",
    },
    InteractionRule {
        drug_a: "simvastatin",
        drug_b: "clarithromycin",
        severity: Severity::Critical,
        description: "Macrolide CYP3A4 inhibition raises statin exposure and the risk of rhabdomyolysis.",
        recommendation: "Hold the statin for the duration of the macrolide course.",
    },
    InteractionRule {
        drug_a: "digoxin",
        drug_b: "amiodarone",
        severity: Severity::Major,
        description: "Amiodarone reduces digoxin clearance and can precipitate digoxin toxicity.",
        recommendation: "Halve the digoxin dose and monitor serum digoxin levels.",
    },
    InteractionRule {
        drug_a: "sertraline",
        drug_b: "tramadol",
        severity: Severity::Major,
        description: "Concurrent serotonergic agents raise the risk of serotonin syndrome.",
        recommendation: "Watch for agitation, hyperthermia, and clonus; consider a non-serotonergic analgesic.",
    },
    InteractionRule {
        drug_a: "sertraline",
        drug_b: "phenelzine",
        severity: Severity::Critical,
        description: "An SSRI combined with an MAOI can cause life-threatening serotonin syndrome.",
        recommendation: "Do not combine; allow a two-week washout between the agents.",
    },
    InteractionRule {
        drug_a: "sildenafil",
        drug_b: "nitroglycerin",
        severity: Severity::Critical,
        description: "PDE5 inhibition with nitrates can cause profound, refractory hypotension.",
        recommendation: "Do not combine; separate use by at least 24 hours.",
    },
    InteractionRule {
        drug_a: "methotrexate",
        drug_b: "ibuprofen",
        severity: Severity::Major,
        description: "NSAIDs reduce renal clearance of methotrexate and raise its toxicity.",
        recommendation: "Avoid NSAIDs around methotrexate dosing days; monitor blood counts.",
    },
];

// ============================================================================
// ALLERGY CROSS-REACTIVITY FAMILIES
// ============================================================================

pub(crate) struct AllergyFamily {
    /// Allergen as recorded on the chart.
    pub allergen: &'static str,
    /// Agents that cross-react with the allergen.
    pub related: &'static [&'static str],
    pub note: &'static str,
}

pub(crate) static CROSS_REACTIVITY: &[AllergyFamily] = &[
    AllergyFamily {
        allergen: "penicillin",
        related: &["amoxicillin", "ampicillin", "augmentin", "piperacillin", "dicloxacillin"],
        note: "Shares the beta-lactam ring with penicillin; cross-reactivity is well documented.",
    },
    AllergyFamily {
        allergen: "sulfa",
        related: &["sulfamethoxazole", "sulfasalazine", "sulfadiazine"],
        note: "Sulfonamide antibiotics cross-react within the class.",
    },
    AllergyFamily {
        allergen: "cephalosporin",
        related: &["cephalexin", "cefazolin", "ceftriaxone", "cefuroxime"],
        note: "Cross-reactivity with other beta-lactam antibiotics occurs in a minority of patients.",
    },
    AllergyFamily {
        allergen: "aspirin",
        related: &["ibuprofen", "naproxen", "ketorolac", "diclofenac"],
        note: "NSAID hypersensitivity frequently extends across COX inhibitors.",
    },
    AllergyFamily {
        allergen: "codeine",
        related: &["morphine", "hydrocodone", "oxycodone"],
        note: "Opioid reactions often extend to related phenanthrene agents.",
    },
];

// ============================================================================
// AGE-BASED DOSING CAUTIONS
// ============================================================================

pub(crate) struct AgeCaution {
    pub drug: &'static str,
    pub reason: &'static str,
    pub recommendation: &'static str,
}

/// Agents needing adjustment in patients older than 65.
pub(crate) static GERIATRIC_CAUTION: &[AgeCaution] = &[
    AgeCaution {
        drug: "digoxin",
        reason: "Reduced clearance in older adults raises serum digoxin levels and the risk of toxicity.",
        recommendation: "Start at 0.125mg daily or lower and monitor serum levels.",
    },
    AgeCaution {
        drug: "diazepam",
        reason: "Prolonged half-life in older adults leads to accumulation, sedation, and falls.",
        recommendation: "Prefer a short-acting agent at the lowest effective dose.",
    },
    AgeCaution {
        drug: "diphenhydramine",
        reason: "Strong anticholinergic burden causes confusion and urinary retention in older adults.",
        recommendation: "Use a non-sedating antihistamine instead.",
    },
    AgeCaution {
        drug: "glyburide",
        reason: "Long-acting sulfonylureas cause prolonged hypoglycemia in older adults.",
        recommendation: "Prefer glipizide or a non-sulfonylurea agent.",
    },
    AgeCaution {
        drug: "amitriptyline",
        reason: "Anticholinergic and orthostatic effects are poorly tolerated in older adults.",
        recommendation: "Consider nortriptyline or an SSRI at a reduced dose.",
    },
    AgeCaution {
        drug: "zolpidem",
        reason: "Impaired clearance prolongs sedation and raises fall risk in older adults.",
        recommendation: "Limit to 5mg at bedtime, if used at all.",
    },
];

/// Agents needing caution in patients younger than 18.
pub(crate) static PEDIATRIC_CAUTION: &[AgeCaution] = &[
    AgeCaution {
        drug: "aspirin",
        reason: "Associated with Reye's syndrome in children with viral illness.",
        recommendation: "Use acetaminophen or ibuprofen per pediatric dosing guidelines.",
    },
    AgeCaution {
        drug: "tetracycline",
        reason: "Deposits in developing teeth and bone in children under eight.",
        recommendation: "Choose an alternative antibiotic per pediatric dosing guidelines.",
    },
    AgeCaution {
        drug: "ciprofloxacin",
        reason: "Fluoroquinolones carry arthropathy risk in growing cartilage.",
        recommendation: "Reserve for infections without a safer alternative; follow pediatric dosing guidelines.",
    },
    AgeCaution {
        drug: "codeine",
        reason: "Ultra-rapid metabolizers can suffer fatal respiratory depression.",
        recommendation: "Avoid in children; select an alternative analgesic per pediatric dosing guidelines.",
    },
    AgeCaution {
        drug: "promethazine",
        reason: "Risk of severe respiratory depression in young children.",
        recommendation: "Do not use under age two; dose older children per pediatric dosing guidelines.",
    },
];

// ============================================================================
// CONDITION CONTRAINDICATIONS
// ============================================================================

pub(crate) struct ContraindicationRule {
    pub drug: &'static str,
    /// Condition phrases matched against the problem list.
    pub conditions: &'static [&'static str],
    pub reason: &'static str,
}

pub(crate) static CONTRAINDICATIONS: &[ContraindicationRule] = &[
    ContraindicationRule {
        drug: "metformin",
        conditions: &["kidney disease", "renal failure", "metabolic acidosis"],
        reason: "Risk of lactic acidosis when renal elimination is impaired.",
    },
    ContraindicationRule {
        drug: "ibuprofen",
        conditions: &["peptic ulcer", "gi bleed", "kidney disease"],
        reason: "NSAIDs worsen GI bleeding and impair renal perfusion.",
    },
    ContraindicationRule {
        drug: "naproxen",
        conditions: &["peptic ulcer", "gi bleed", "kidney disease"],
        reason: "NSAIDs worsen GI bleeding and impair renal perfusion.",
    },
    ContraindicationRule {
        drug: "propranolol",
        conditions: &["asthma"],
        reason: "Non-selective beta blockade can provoke severe bronchospasm.",
    },
    ContraindicationRule {
        drug: "aspirin",
        conditions: &["active bleeding", "hemophilia"],
        reason: "Antiplatelet effect aggravates uncontrolled bleeding.",
    },
    ContraindicationRule {
        drug: "warfarin",
        conditions: &["active bleeding", "pregnancy"],
        reason: "Anticoagulation is unsafe with active hemorrhage and warfarin is teratogenic.",
    },
    ContraindicationRule {
        drug: "lisinopril",
        conditions: &["pregnancy", "angioedema"],
        reason: "ACE inhibitors cause fetal injury and can recur angioedema.",
    },
    ContraindicationRule {
        drug: "isotretinoin",
        conditions: &["pregnancy"],
        reason: "Severe teratogen; pregnancy must be excluded before every course.",
    },
    ContraindicationRule {
        drug: "ciprofloxacin",
        conditions: &["myasthenia gravis"],
        reason: "Fluoroquinolones exacerbate neuromuscular weakness.",
    },
];

// ============================================================================
// THERAPEUTIC CLASSES (duplicate-therapy detection)
// ============================================================================

pub(crate) struct TherapeuticClass {
    pub name: &'static str,
    pub members: &'static [&'static str],
    pub recommendation: &'static str,
}

pub(crate) static THERAPEUTIC_CLASSES: &[TherapeuticClass] = &[
    TherapeuticClass {
        name: "NSAIDs",
        members: &["ibuprofen", "naproxen", "ketorolac", "diclofenac", "meloxicam", "indomethacin"],
        recommendation: "Avoid stacking NSAIDs; combined use raises GI and renal risk without added benefit.",
    },
    TherapeuticClass {
        name: "Statins",
        members: &["atorvastatin", "simvastatin", "rosuvastatin", "pravastatin", "lovastatin"],
        recommendation: "Use one statin at a time; switch agents rather than adding a second.",
    },
    TherapeuticClass {
        name: "ACE Inhibitors",
        members: &["lisinopril", "enalapril", "ramipril", "captopril", "benazepril"],
        recommendation: "Duplicate ACE inhibition adds hypotension and hyperkalemia risk.",
    },
    TherapeuticClass {
        name: "Beta Blockers",
        members: &["metoprolol", "atenolol", "propranolol", "carvedilol", "bisoprolol"],
        recommendation: "Review before adding a second beta blocker; bradycardia risk is additive.",
    },
    TherapeuticClass {
        name: "Benzodiazepines",
        members: &["diazepam", "lorazepam", "alprazolam", "clonazepam", "temazepam"],
        recommendation: "Avoid overlapping benzodiazepines; taper one before starting another.",
    },
    TherapeuticClass {
        name: "Opioids",
        members: &["morphine", "oxycodone", "hydrocodone", "codeine", "tramadol", "fentanyl"],
        recommendation: "Overlapping opioids require a deliberate rotation plan; review total daily morphine equivalents.",
    },
    TherapeuticClass {
        name: "Proton Pump Inhibitors",
        members: &["omeprazole", "pantoprazole", "esomeprazole", "lansoprazole"],
        recommendation: "Doubled PPI therapy adds no benefit; consolidate to one agent.",
    },
    TherapeuticClass {
        name: "SSRIs",
        members: &["sertraline", "fluoxetine", "citalopram", "escitalopram", "paroxetine"],
        recommendation: "Two SSRIs add serotonin syndrome risk without added efficacy; cross-taper instead.",
    },
];
