//! Permission engine
//!
//! Computes a principal's effective permission set once, at construction,
//! and answers membership, route, and super-admin queries against it.
//! Every operation is infallible: missing data degrades to "not granted",
//! never to an error.

use crate::permission::Permission;
use crate::principal::{CustomRole, Principal, SuperAdminPolicy};
use crate::role::RoleKey;
use crate::routes::route_requirements;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Authorization decisions for one principal.
///
/// The effective set is the union of the base role's permissions and every
/// custom role's resolved permissions; a principal matching the
/// super-admin policy holds the full vocabulary instead. The set is
/// computed eagerly because it is small and the principal does not change
/// permissions mid-session without reconstruction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PermissionEngine {
    principal: Principal,
    effective: BTreeSet<Permission>,
    super_admin: bool,
}

impl PermissionEngine {
    pub fn new(principal: &Principal, policy: &SuperAdminPolicy) -> Self {
        let super_admin = policy.matches(principal);
        let mut effective = BTreeSet::new();

        if super_admin {
            effective.extend(Permission::ALL);
        } else {
            if let Some(role) = principal.role {
                effective.extend(role.base_permissions().iter().copied());
            }
            for custom_role in &principal.custom_roles {
                effective.extend(custom_role.resolved_permissions());
            }
        }

        debug!(
            role = ?principal.role,
            super_admin,
            permissions = effective.len(),
            "effective permission set computed"
        );

        Self {
            principal: principal.clone(),
            effective,
            super_admin,
        }
    }

    /// Like [`PermissionEngine::new`], with custom roles fetched from an
    /// external store merged in. A failed fetch is the caller's to absorb:
    /// pass an empty slice and the principal keeps its own grants only.
    pub fn with_custom_roles(
        principal: &Principal,
        fetched: &[CustomRole],
        policy: &SuperAdminPolicy,
    ) -> Self {
        let mut merged = principal.clone();
        merged.custom_roles.extend(fetched.iter().cloned());
        Self::new(&merged, policy)
    }

    /// Exact set membership. No prefix or wildcard matching.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.effective.contains(&permission)
    }

    /// True iff at least one of `permissions` is held. An empty slice is
    /// vacuously true: "no permissions required" means "always allowed".
    pub fn has_any(&self, permissions: &[Permission]) -> bool {
        if permissions.is_empty() {
            return true;
        }
        permissions.iter().any(|p| self.effective.contains(p))
    }

    /// True iff every one of `permissions` is held. `all` on an empty
    /// slice is vacuously true.
    pub fn has_all(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.effective.contains(p))
    }

    /// String-token variant of [`PermissionEngine::has_permission`].
    /// A token outside the vocabulary is never held.
    pub fn has_permission_str(&self, token: &str) -> bool {
        Permission::parse(token).is_some_and(|p| self.has_permission(p))
    }

    /// String-token variant of [`PermissionEngine::has_any`]. Unknown
    /// tokens contribute nothing; an empty slice stays vacuously true.
    pub fn has_any_str<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        if tokens.is_empty() {
            return true;
        }
        tokens.iter().any(|t| self.has_permission_str(t.as_ref()))
    }

    /// String-token variant of [`PermissionEngine::has_all`]. An unknown
    /// token cannot be held, so it fails the conjunction.
    pub fn has_all_str<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        tokens.iter().all(|t| self.has_permission_str(t.as_ref()))
    }

    /// Route guard with any-of semantics. A path absent from the route
    /// table is open to everyone (default-allow), including principals
    /// with an empty permission set.
    pub fn can_access_route(&self, path: &str) -> bool {
        match route_requirements(path) {
            Some(required) => {
                let allowed = self.has_any(required);
                if !allowed {
                    debug!(path, role = ?self.principal.role, "route access denied");
                }
                allowed
            }
            None => true,
        }
    }

    /// Whether the principal matched the injected super-admin policy at
    /// construction.
    pub fn is_super_admin(&self) -> bool {
        self.super_admin
    }

    /// The computed effective set, for display surfaces such as a
    /// role-matrix screen.
    pub fn effective_permissions(&self) -> &BTreeSet<Permission> {
        &self.effective
    }

    pub fn role(&self) -> Option<RoleKey> {
        self.principal.role
    }

    pub fn email(&self) -> Option<&str> {
        self.principal.email.as_deref()
    }
}
