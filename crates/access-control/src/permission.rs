//! Permission vocabulary
//!
//! Capability tokens of the form `resource:action`. The vocabulary is
//! closed: every token the system understands is a variant here, and a
//! string outside the vocabulary never matches anything. Tokens serialize
//! as their string form (`"patient:read"`), which is also what external
//! configuration documents carry.

use crate::error::AccessControlError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One capability in the closed vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permission {
    // Patient records
    #[serde(rename = "patient:create")]
    PatientCreate,
    #[serde(rename = "patient:read")]
    PatientRead,
    #[serde(rename = "patient:update")]
    PatientUpdate,
    #[serde(rename = "patient:delete")]
    PatientDelete,

    // Prescriptions
    #[serde(rename = "prescription:create")]
    PrescriptionCreate,
    #[serde(rename = "prescription:read")]
    PrescriptionRead,
    #[serde(rename = "prescription:update")]
    PrescriptionUpdate,
    #[serde(rename = "prescription:cancel")]
    PrescriptionCancel,

    // Lab orders and results
    #[serde(rename = "lab:order")]
    LabOrder,
    #[serde(rename = "lab:read")]
    LabRead,
    #[serde(rename = "lab:update")]
    LabUpdate,

    // Referrals
    #[serde(rename = "referral:create")]
    ReferralCreate,
    #[serde(rename = "referral:read")]
    ReferralRead,
    #[serde(rename = "referral:update")]
    ReferralUpdate,

    // Appointments
    #[serde(rename = "appointment:create")]
    AppointmentCreate,
    #[serde(rename = "appointment:read")]
    AppointmentRead,
    #[serde(rename = "appointment:update")]
    AppointmentUpdate,
    #[serde(rename = "appointment:cancel")]
    AppointmentCancel,

    // Staff administration
    #[serde(rename = "user:create")]
    UserCreate,
    #[serde(rename = "user:read")]
    UserRead,
    #[serde(rename = "user:update")]
    UserUpdate,
    #[serde(rename = "user:delete")]
    UserDelete,

    // Role administration
    #[serde(rename = "role:read")]
    RoleRead,
    #[serde(rename = "role:assign")]
    RoleAssign,

    // Analytics and reporting
    #[serde(rename = "analytics:view")]
    AnalyticsView,
    #[serde(rename = "report:export")]
    ReportExport,
}

impl Permission {
    /// The full vocabulary. Role tables and the super-admin grant are
    /// defined against this array, so adding a variant here is the only
    /// step needed to widen the vocabulary.
    pub const ALL: [Permission; 26] = [
        Permission::PatientCreate,
        Permission::PatientRead,
        Permission::PatientUpdate,
        Permission::PatientDelete,
        Permission::PrescriptionCreate,
        Permission::PrescriptionRead,
        Permission::PrescriptionUpdate,
        Permission::PrescriptionCancel,
        Permission::LabOrder,
        Permission::LabRead,
        Permission::LabUpdate,
        Permission::ReferralCreate,
        Permission::ReferralRead,
        Permission::ReferralUpdate,
        Permission::AppointmentCreate,
        Permission::AppointmentRead,
        Permission::AppointmentUpdate,
        Permission::AppointmentCancel,
        Permission::UserCreate,
        Permission::UserRead,
        Permission::UserUpdate,
        Permission::UserDelete,
        Permission::RoleRead,
        Permission::RoleAssign,
        Permission::AnalyticsView,
        Permission::ReportExport,
    ];

    /// String form of the token, `resource:action`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::PatientCreate => "patient:create",
            Permission::PatientRead => "patient:read",
            Permission::PatientUpdate => "patient:update",
            Permission::PatientDelete => "patient:delete",
            Permission::PrescriptionCreate => "prescription:create",
            Permission::PrescriptionRead => "prescription:read",
            Permission::PrescriptionUpdate => "prescription:update",
            Permission::PrescriptionCancel => "prescription:cancel",
            Permission::LabOrder => "lab:order",
            Permission::LabRead => "lab:read",
            Permission::LabUpdate => "lab:update",
            Permission::ReferralCreate => "referral:create",
            Permission::ReferralRead => "referral:read",
            Permission::ReferralUpdate => "referral:update",
            Permission::AppointmentCreate => "appointment:create",
            Permission::AppointmentRead => "appointment:read",
            Permission::AppointmentUpdate => "appointment:update",
            Permission::AppointmentCancel => "appointment:cancel",
            Permission::UserCreate => "user:create",
            Permission::UserRead => "user:read",
            Permission::UserUpdate => "user:update",
            Permission::UserDelete => "user:delete",
            Permission::RoleRead => "role:read",
            Permission::RoleAssign => "role:assign",
            Permission::AnalyticsView => "analytics:view",
            Permission::ReportExport => "report:export",
        }
    }

    /// Lenient parse: `None` for anything outside the vocabulary.
    ///
    /// External configuration (custom roles, menu items) is stringly typed;
    /// an unknown token there must never match, not fail the whole document.
    pub fn parse(token: &str) -> Option<Permission> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == token)
    }
}

impl FromStr for Permission {
    type Err = AccessControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::parse(s).ok_or_else(|| AccessControlError::UnknownPermission(s.to_string()))
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
