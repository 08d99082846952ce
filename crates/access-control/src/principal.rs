//! Principals, custom roles, and the super-admin policy
//!
//! A principal is the acting identity handed over by the session layer:
//! a base role, an optional identity string, and any custom roles granted
//! on top. Custom roles arrive from an external store as raw permission
//! strings; unknown tokens in them are ignored rather than rejected.

use crate::error::AccessControlError;
use crate::permission::Permission;
use crate::role::RoleKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

/// An externally supplied, additively applied bundle of permissions.
///
/// Permission strings stay raw here because the documents come from
/// outside the closed vocabulary's reach; resolution happens when the
/// effective set is computed, and unknown tokens contribute nothing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CustomRole {
    pub id: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl CustomRole {
    pub fn new(id: impl Into<String>, permissions: Vec<String>) -> Self {
        Self {
            id: id.into(),
            permissions,
        }
    }

    /// Parse the raw permission strings against the closed vocabulary.
    /// Unknown tokens are dropped with a warning.
    pub fn resolved_permissions(&self) -> BTreeSet<Permission> {
        let mut resolved = BTreeSet::new();
        for token in &self.permissions {
            match Permission::parse(token) {
                Some(permission) => {
                    resolved.insert(permission);
                }
                None => {
                    warn!(
                        custom_role = %self.id,
                        token = %token,
                        "ignoring unknown permission token in custom role"
                    );
                }
            }
        }
        resolved
    }

    /// Load a custom-role list from a caller-fetched JSON document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Vec<CustomRole>, AccessControlError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// The acting identity being authorized.
///
/// `role: None` models a session without a recognized role (not yet
/// loaded, or an unrecognized role string); such a principal has an empty
/// base permission set but is still subject to default-allow routes.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Principal {
    #[serde(default)]
    pub role: Option<RoleKey>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub custom_roles: Vec<CustomRole>,
}

impl Principal {
    pub fn new(role: RoleKey) -> Self {
        Self {
            role: Some(role),
            email: None,
            custom_roles: Vec::new(),
        }
    }

    /// A principal with no role and no grants.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build from the raw strings a session provider hands over. An
    /// unrecognized role string degrades to `role: None`.
    pub fn from_session(role: &str, email: Option<String>) -> Self {
        let parsed = RoleKey::parse(role);
        if parsed.is_none() {
            warn!(role = %role, "session supplied an unrecognized role");
        }
        Self {
            role: parsed,
            email,
            custom_roles: Vec::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_custom_role(mut self, custom_role: CustomRole) -> Self {
        self.custom_roles.push(custom_role);
        self
    }
}

/// Injected super-admin identity configuration.
///
/// The engine never hardcodes an identity; whoever assembles the
/// application decides which identities are super-admins. An empty policy
/// means nobody is.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SuperAdminPolicy {
    identities: BTreeSet<String>,
}

impl SuperAdminPolicy {
    pub fn new<I, S>(identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identities: identities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Identity comparison is case-insensitive; email casing is not
    /// under the caller's control.
    pub fn matches(&self, principal: &Principal) -> bool {
        match &principal.email {
            Some(email) => self
                .identities
                .iter()
                .any(|identity| identity.eq_ignore_ascii_case(email)),
            None => false,
        }
    }
}
