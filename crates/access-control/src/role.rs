//! Role vocabulary and the role-to-permission table
//!
//! Nine base roles cover the staff and patient population of a clinic.
//! Each role maps to a fixed permission slice; the table is defined at
//! compile time and never changes at runtime. The super-admin entry is
//! the full vocabulary by construction, so it stays complete as tokens
//! are added.

use crate::error::AccessControlError;
use crate::permission::Permission;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Base role of a principal. String forms are the kebab-case names the
/// session layer hands over (`"super-admin"`, `"lab-technician"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleKey {
    #[serde(rename = "super-admin")]
    SuperAdmin,
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "delegate")]
    Delegate,
    #[serde(rename = "doctor")]
    Doctor,
    #[serde(rename = "nurse")]
    Nurse,
    #[serde(rename = "receptionist")]
    Receptionist,
    #[serde(rename = "pharmacist")]
    Pharmacist,
    #[serde(rename = "lab-technician")]
    LabTechnician,
    #[serde(rename = "patient")]
    Patient,
}

impl RoleKey {
    pub const ALL: [RoleKey; 9] = [
        RoleKey::SuperAdmin,
        RoleKey::Admin,
        RoleKey::Delegate,
        RoleKey::Doctor,
        RoleKey::Nurse,
        RoleKey::Receptionist,
        RoleKey::Pharmacist,
        RoleKey::LabTechnician,
        RoleKey::Patient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKey::SuperAdmin => "super-admin",
            RoleKey::Admin => "admin",
            RoleKey::Delegate => "delegate",
            RoleKey::Doctor => "doctor",
            RoleKey::Nurse => "nurse",
            RoleKey::Receptionist => "receptionist",
            RoleKey::Pharmacist => "pharmacist",
            RoleKey::LabTechnician => "lab-technician",
            RoleKey::Patient => "patient",
        }
    }

    /// Lenient parse: `None` for anything outside the nine-role vocabulary.
    pub fn parse(role: &str) -> Option<RoleKey> {
        RoleKey::ALL.iter().copied().find(|r| r.as_str() == role)
    }

    /// Static permissions bound to the role.
    ///
    /// Super-admin returns the whole vocabulary rather than a hand-kept
    /// list, so its set is always equal to `Permission::ALL`.
    pub fn base_permissions(&self) -> &'static [Permission] {
        match self {
            RoleKey::SuperAdmin => &Permission::ALL,
            RoleKey::Admin => &[
                Permission::UserCreate,
                Permission::UserRead,
                Permission::UserUpdate,
                Permission::UserDelete,
                Permission::RoleRead,
                Permission::RoleAssign,
                Permission::PatientRead,
                Permission::AppointmentRead,
                Permission::AnalyticsView,
                Permission::ReportExport,
            ],
            RoleKey::Delegate => &[
                Permission::UserRead,
                Permission::RoleRead,
                Permission::PatientRead,
                Permission::AppointmentRead,
                Permission::AnalyticsView,
                Permission::ReportExport,
            ],
            RoleKey::Doctor => &[
                Permission::PatientCreate,
                Permission::PatientRead,
                Permission::PatientUpdate,
                Permission::PrescriptionCreate,
                Permission::PrescriptionRead,
                Permission::PrescriptionUpdate,
                Permission::PrescriptionCancel,
                Permission::LabOrder,
                Permission::LabRead,
                Permission::ReferralCreate,
                Permission::ReferralRead,
                Permission::ReferralUpdate,
                Permission::AppointmentRead,
                Permission::AppointmentUpdate,
                Permission::AnalyticsView,
            ],
            RoleKey::Nurse => &[
                Permission::PatientRead,
                Permission::PatientUpdate,
                Permission::PrescriptionRead,
                Permission::LabRead,
                Permission::LabUpdate,
                Permission::AppointmentRead,
                Permission::AppointmentUpdate,
            ],
            RoleKey::Receptionist => &[
                Permission::PatientCreate,
                Permission::PatientRead,
                Permission::AppointmentCreate,
                Permission::AppointmentRead,
                Permission::AppointmentUpdate,
                Permission::AppointmentCancel,
                Permission::ReferralRead,
            ],
            RoleKey::Pharmacist => &[
                Permission::PatientRead,
                Permission::PrescriptionRead,
                Permission::PrescriptionUpdate,
            ],
            RoleKey::LabTechnician => &[
                Permission::PatientRead,
                Permission::LabRead,
                Permission::LabUpdate,
            ],
            RoleKey::Patient => &[
                Permission::AppointmentCreate,
                Permission::AppointmentRead,
                Permission::AppointmentCancel,
                Permission::PrescriptionRead,
                Permission::LabRead,
                Permission::ReferralRead,
            ],
        }
    }
}

impl FromStr for RoleKey {
    type Err = AccessControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleKey::parse(s).ok_or_else(|| AccessControlError::UnknownRole(s.to_string()))
    }
}

impl std::fmt::Display for RoleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
