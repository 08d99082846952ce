//! Access decision records
//!
//! Staff-facing screens and audit trails want more than a boolean: who
//! asked, what they asked for, the verdict, and a displayable reason.
//! Decisions are plain values; the engine stamps them with a timestamp the
//! caller supplies, so evaluation stays deterministic and storage stays a
//! caller concern.

use crate::engine::PermissionEngine;
use crate::permission::Permission;
use crate::role::RoleKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of check produced a decision record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    Permission,
    Route,
}

/// One recorded authorization verdict.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccessDecision {
    pub kind: DecisionKind,
    /// The permission token or route path that was asked about.
    pub subject: String,
    pub role: Option<RoleKey>,
    pub email: Option<String>,
    pub allowed: bool,
    pub reason: String,
    pub decided_at: DateTime<Utc>,
}

impl PermissionEngine {
    /// Evaluate a permission check and record the verdict with a reason.
    pub fn explain_permission(
        &self,
        permission: Permission,
        decided_at: DateTime<Utc>,
    ) -> AccessDecision {
        let allowed = self.has_permission(permission);
        let reason = if allowed && self.is_super_admin() {
            "Super-admin identity grants the full permission set".to_string()
        } else if allowed {
            "Permission granted by assigned roles".to_string()
        } else if self.role().is_none() && self.effective_permissions().is_empty() {
            "Principal has no active role".to_string()
        } else {
            "Permission not held by assigned roles".to_string()
        };

        AccessDecision {
            kind: DecisionKind::Permission,
            subject: permission.as_str().to_string(),
            role: self.role(),
            email: self.email().map(str::to_string),
            allowed,
            reason,
            decided_at,
        }
    }

    /// Evaluate a route check and record the verdict with a reason.
    pub fn explain_route(&self, path: &str, decided_at: DateTime<Utc>) -> AccessDecision {
        let (allowed, reason) = match crate::routes::route_requirements(path) {
            None => (
                true,
                "Route is not guarded; access is open by default".to_string(),
            ),
            Some(required) => {
                if self.has_any(required) {
                    (true, "Holds at least one required permission".to_string())
                } else {
                    (
                        false,
                        "None of the required permissions are held".to_string(),
                    )
                }
            }
        };

        AccessDecision {
            kind: DecisionKind::Route,
            subject: path.to_string(),
            role: self.role(),
            email: self.email().map(str::to_string),
            allowed,
            reason,
            decided_at,
        }
    }
}
