//! Combined Workflow Tests
//!
//! End-to-end flows the host application runs: authorize the acting
//! principal first, then evaluate the clinical action. The two engines
//! never call each other; the host sequences them, and these tests pin
//! that sequencing down.

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use sanare_access_control::{
        AccessDecision, CustomRole, Permission, PermissionEngine, Principal, RoleKey,
        SuperAdminPolicy,
    };
    use sanare_med_safety::{
        check_duplicate_therapy, evaluate_report, PatientContext, SafetyAssessment,
    };

    fn decided_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 21, 14, 0, 0).unwrap()
    }

    fn engine_for(role: RoleKey) -> PermissionEngine {
        PermissionEngine::new(&Principal::new(role), &SuperAdminPolicy::empty())
    }

    /// The host's prescribing gate: authorization first, then the safety
    /// verdict decides whether the order proceeds
    fn prescribing_proceeds(engine: &PermissionEngine, candidate: &str, chart: &PatientContext) -> bool {
        if !engine.has_permission(Permission::PrescriptionCreate) {
            return false;
        }
        if !engine.can_access_route("/prescriptions/new") {
            return false;
        }
        !evaluate_report(candidate, chart).assessment.is_blocking()
    }

    // =========================================================================
    // Doctor prescribing, gated by safety
    // =========================================================================

    #[test]
    fn scenario_doctor_prescribes_through_safety_gate() {
        let doctor = engine_for(RoleKey::Doctor);
        let chart = PatientContext::new()
            .with_medications(["Warfarin 5mg"])
            .with_age(71)
            .with_conditions(["active bleeding"]);

        // RBAC alone would let the order through
        assert!(doctor.has_permission(Permission::PrescriptionCreate));
        assert!(doctor.can_access_route("/prescriptions/new"));

        // Anticoagulated, actively bleeding: aspirin is blocked
        let report = evaluate_report("Aspirin 81mg", &chart);
        assert_eq!(report.assessment, SafetyAssessment::Contraindicated);
        assert_eq!(report.findings.len(), 2);
        assert!(!prescribing_proceeds(&doctor, "Aspirin 81mg", &chart));

        // A candidate with no rule hits sails through the same gate
        assert!(prescribing_proceeds(&doctor, "Levothyroxine 50mcg", &chart));
    }

    #[test]
    fn scenario_receptionist_never_reaches_evaluation() {
        let receptionist = engine_for(RoleKey::Receptionist);
        let chart = PatientContext::new();

        assert!(!receptionist.has_permission(Permission::PrescriptionCreate));
        assert!(!receptionist.can_access_route("/prescriptions/new"));
        assert!(!prescribing_proceeds(&receptionist, "Levothyroxine 50mcg", &chart));

        // The denial is explainable for the audit trail
        let decision =
            receptionist.explain_permission(Permission::PrescriptionCreate, decided_at());
        assert!(!decision.allowed);
        assert_eq!(decision.reason, "Permission not held by assigned roles");
    }

    // =========================================================================
    // Pharmacist queue review
    // =========================================================================

    #[test]
    fn scenario_pharmacist_reviews_duplicate_therapy() {
        let pharmacist = engine_for(RoleKey::Pharmacist);
        assert!(pharmacist.can_access_route("/prescriptions"));

        let chart = PatientContext::new()
            .with_medications(["Ibuprofen 400mg", "Omeprazole 20mg"]);

        // Incoming order overlaps the NSAID already on the chart
        let duplications = check_duplicate_therapy("Naproxen 500mg", &chart.medications);
        assert_eq!(duplications.len(), 1);
        assert_eq!(duplications[0].class_name, "NSAIDs");
        assert_eq!(duplications[0].existing, "Ibuprofen 400mg");

        // Pharmacists adjust orders; they do not author them
        assert!(pharmacist.has_permission(Permission::PrescriptionUpdate));
        assert!(!pharmacist.has_permission(Permission::PrescriptionCreate));
    }

    // =========================================================================
    // Custom roles widening a base role
    // =========================================================================

    #[test]
    fn scenario_locum_doctor_with_reporting_grant() {
        let baseline = engine_for(RoleKey::Doctor);
        assert!(!baseline.can_access_route("/reports"));

        let document = br#"[
            { "id": "locum-reporting", "permissions": ["report:export"] }
        ]"#;
        let fetched = CustomRole::from_json_slice(document).unwrap();
        let widened = PermissionEngine::with_custom_roles(
            &Principal::new(RoleKey::Doctor),
            &fetched,
            &SuperAdminPolicy::empty(),
        );

        assert!(widened.can_access_route("/reports"));
        // The base clinical surface is untouched
        assert!(widened.has_permission(Permission::PrescriptionCreate));

        let decision = widened.explain_permission(Permission::ReportExport, decided_at());
        assert!(decision.allowed);
        assert_eq!(decision.reason, "Permission granted by assigned roles");
    }

    // =========================================================================
    // Super-admin audit trail
    // =========================================================================

    #[test]
    fn scenario_super_admin_decisions_serialize_for_audit() {
        let policy = SuperAdminPolicy::new(["root@sanare.example"]);
        let principal = Principal::new(RoleKey::Doctor).with_email("root@sanare.example");
        let engine = PermissionEngine::new(&principal, &policy);

        let decisions = vec![
            engine.explain_permission(Permission::UserDelete, decided_at()),
            engine.explain_route("/admin/users", decided_at()),
        ];
        assert!(decisions.iter().all(|d| d.allowed));
        assert_eq!(
            decisions[0].reason,
            "Super-admin identity grants the full permission set"
        );

        let json = serde_json::to_string(&decisions).unwrap();
        let restored: Vec<AccessDecision> = serde_json::from_str(&json).unwrap();
        assert_eq!(decisions, restored);
        assert_eq!(restored[1].decided_at, decided_at());
    }
}
