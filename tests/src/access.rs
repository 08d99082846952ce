//! Access Control Tests
//!
//! Role-matrix coverage for the permission engine:
//! - Session documents resolving to working engines
//! - Capability grants and denials per built-in role
//! - Route guarding across the clinic navigation map
//! - Custom-role documents and the super-admin policy

use serde::{Deserialize, Serialize};

/// Session payload in the shape the host application stores it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestSession {
    pub user_id: String,
    pub role: String,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanare_access_control::{
        guarded_routes, CustomRole, Permission, PermissionEngine, Principal, RoleKey,
        SuperAdminPolicy,
    };

    fn create_test_session(role: &str) -> TestSession {
        TestSession {
            user_id: "USR-001".to_string(),
            role: role.to_string(),
            email: Some("staff@sanare.example".to_string()),
        }
    }

    fn engine_from_session(session: &TestSession) -> PermissionEngine {
        let principal = Principal::from_session(&session.role, session.email.clone());
        PermissionEngine::new(&principal, &SuperAdminPolicy::empty())
    }

    fn engine_for(role: RoleKey) -> PermissionEngine {
        PermissionEngine::new(&Principal::new(role), &SuperAdminPolicy::empty())
    }

    // =========================================================================
    // Session documents
    // =========================================================================

    /// Every stored role string yields an engine with that role's grants
    #[test]
    fn test_session_documents_produce_working_engines() {
        for role in RoleKey::ALL {
            let session = create_test_session(role.as_str());
            let json = serde_json::to_string(&session).unwrap();
            let restored: TestSession = serde_json::from_str(&json).unwrap();

            let engine = engine_from_session(&restored);
            assert_eq!(engine.role(), Some(role));
        }
    }

    /// A role string outside the vocabulary degrades to an empty set but
    /// keeps default-allow routes working
    #[test]
    fn test_unrecognized_session_role_gets_open_routes_only() {
        let session = create_test_session("surgeon");
        let engine = engine_from_session(&session);

        assert_eq!(engine.role(), None);
        assert!(engine.effective_permissions().is_empty());
        for route in guarded_routes() {
            assert!(!engine.can_access_route(route), "{} should be denied", route);
        }
        assert!(engine.can_access_route("/dashboard"));
        assert!(engine.can_access_route("/help"));
    }

    // =========================================================================
    // Capability matrix
    // =========================================================================

    /// One granted and one denied token per staff role
    #[test]
    fn test_role_capability_matrix() {
        let matrix: &[(RoleKey, &str, &str)] = &[
            (RoleKey::Admin, "user:create", "prescription:create"),
            (RoleKey::Delegate, "analytics:view", "user:create"),
            (RoleKey::Doctor, "prescription:create", "user:read"),
            (RoleKey::Nurse, "lab:update", "prescription:create"),
            (RoleKey::Receptionist, "appointment:cancel", "prescription:read"),
            (RoleKey::Pharmacist, "prescription:update", "prescription:create"),
            (RoleKey::LabTechnician, "lab:update", "lab:order"),
            (RoleKey::Patient, "appointment:create", "user:read"),
        ];

        for (role, granted, denied) in matrix {
            let engine = engine_for(*role);
            assert!(
                engine.has_permission_str(granted),
                "{} should hold {}",
                role,
                granted
            );
            assert!(
                !engine.has_permission_str(denied),
                "{} should not hold {}",
                role,
                denied
            );
        }
    }

    #[test]
    fn test_effective_sets_stay_inside_vocabulary() {
        for role in RoleKey::ALL {
            let engine = engine_for(role);
            assert!(engine.effective_permissions().len() <= Permission::ALL.len());
        }
        let super_admin = engine_for(RoleKey::SuperAdmin);
        assert_eq!(
            super_admin.effective_permissions().len(),
            Permission::ALL.len()
        );
    }

    // =========================================================================
    // Route matrix
    // =========================================================================

    #[test]
    fn test_route_matrix() {
        let matrix: &[(RoleKey, &str, bool)] = &[
            (RoleKey::Doctor, "/patients/new", true),
            (RoleKey::Doctor, "/prescriptions/new", true),
            (RoleKey::Doctor, "/admin/users", false),
            (RoleKey::Nurse, "/patients", true),
            (RoleKey::Nurse, "/analytics", false),
            (RoleKey::Receptionist, "/appointments", true),
            (RoleKey::Receptionist, "/referrals", true),
            (RoleKey::Receptionist, "/referrals/new", false),
            (RoleKey::Pharmacist, "/prescriptions", true),
            (RoleKey::Pharmacist, "/prescriptions/new", false),
            (RoleKey::LabTechnician, "/lab-orders", true),
            (RoleKey::LabTechnician, "/lab-orders/new", false),
            (RoleKey::Admin, "/admin/users", true),
            (RoleKey::Admin, "/admin/roles", true),
            (RoleKey::Admin, "/reports", true),
            (RoleKey::Patient, "/patients", false),
            (RoleKey::Patient, "/patients/new", false),
            (RoleKey::Patient, "/admin/users", false),
            (RoleKey::Patient, "/appointments", true),
        ];

        for (role, route, expected) in matrix {
            let engine = engine_for(*role);
            assert_eq!(
                engine.can_access_route(route),
                *expected,
                "{} on {} should be {}",
                role,
                route,
                expected
            );
        }
    }

    /// Unguarded paths are open for every role, including patient
    #[test]
    fn test_default_allow_for_every_role() {
        for role in RoleKey::ALL {
            let engine = engine_for(role);
            assert!(engine.can_access_route("/dashboard"));
            assert!(engine.can_access_route("/settings/profile"));
        }
    }

    // =========================================================================
    // Custom roles and the super-admin policy
    // =========================================================================

    /// A stored custom-role document widens a receptionist's reach to the
    /// lab queue; tokens outside the vocabulary contribute nothing
    #[test]
    fn test_custom_role_document_extends_receptionist() {
        let document = br#"[
            { "id": "front-desk-labs", "permissions": ["lab:read", "inventory:manage"] }
        ]"#;
        let fetched = CustomRole::from_json_slice(document).unwrap();

        let principal = Principal::new(RoleKey::Receptionist);
        let engine =
            PermissionEngine::with_custom_roles(&principal, &fetched, &SuperAdminPolicy::empty());

        assert!(engine.has_permission_str("lab:read"));
        assert!(engine.can_access_route("/lab-orders"));
        assert!(!engine.has_permission_str("inventory:manage"));
    }

    #[test]
    fn test_super_admin_policy_matrix() {
        let policy = SuperAdminPolicy::new(["Root@Sanare.example", "cto@sanare.example"]);

        let matched = Principal::new(RoleKey::Patient).with_email("root@sanare.example");
        let engine = PermissionEngine::new(&matched, &policy);
        assert!(engine.is_super_admin());
        assert_eq!(engine.effective_permissions().len(), Permission::ALL.len());

        let unmatched = Principal::new(RoleKey::Admin).with_email("admin@sanare.example");
        let engine = PermissionEngine::new(&unmatched, &policy);
        assert!(!engine.is_super_admin());
        assert!(!engine.has_permission(Permission::PrescriptionCreate));

        let no_email = Principal::new(RoleKey::Doctor);
        assert!(!PermissionEngine::new(&no_email, &policy).is_super_admin());
    }
}
