//! Route permission table
//!
//! Maps application route paths to the permissions that may open them,
//! with any-of semantics. Routes not listed here are open to every
//! principal: default-allow is the inherited, deliberate policy of this
//! table, so a screen is only ever locked by adding it below.

use crate::permission::Permission;

/// Permission alternatives required for a route, or `None` when the
/// route is unguarded. `None` means allow, not deny.
pub fn route_requirements(path: &str) -> Option<&'static [Permission]> {
    match path {
        "/patients" => Some(&[Permission::PatientRead]),
        "/patients/new" => Some(&[Permission::PatientCreate, Permission::PatientRead]),
        "/prescriptions" => Some(&[Permission::PrescriptionRead]),
        "/prescriptions/new" => Some(&[Permission::PrescriptionCreate]),
        "/lab-orders" => Some(&[Permission::LabRead]),
        "/lab-orders/new" => Some(&[Permission::LabOrder]),
        "/referrals" => Some(&[Permission::ReferralRead]),
        "/referrals/new" => Some(&[Permission::ReferralCreate]),
        "/appointments" => Some(&[Permission::AppointmentRead, Permission::AppointmentCreate]),
        "/admin/users" => Some(&[Permission::UserRead]),
        "/admin/users/new" => Some(&[Permission::UserCreate]),
        "/admin/roles" => Some(&[Permission::RoleRead]),
        "/analytics" => Some(&[Permission::AnalyticsView]),
        "/reports" => Some(&[Permission::ReportExport]),
        _ => None,
    }
}

/// Every guarded route path, for matrix displays and table audits.
pub fn guarded_routes() -> &'static [&'static str] {
    &[
        "/patients",
        "/patients/new",
        "/prescriptions",
        "/prescriptions/new",
        "/lab-orders",
        "/lab-orders/new",
        "/referrals",
        "/referrals/new",
        "/appointments",
        "/admin/users",
        "/admin/users/new",
        "/admin/roles",
        "/analytics",
        "/reports",
    ]
}
