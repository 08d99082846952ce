//! Sanare Access Control - Role-Based Authorization Engine
//!
//! Pure Rust authorization decisions for the Sanare Health clinic
//! platform. Given a principal (base role, optional identity, custom
//! roles), the engine computes an effective permission set once and
//! answers capability, route, and menu-visibility queries against it.
//!
//! # Features
//!
//! - Closed `resource:action` permission vocabulary (unknown tokens never match)
//! - Nine-role permission table with a structurally complete super-admin entry
//! - Any-of route guards with explicit default-allow for unlisted paths
//! - Recursive menu-tree filtering for navigation config
//! - Injected super-admin identity policy (no hardcoded identities)
//! - Access-decision records with display-ready reason strings
//!
//! # Example
//!
//! ```rust
//! use sanare_access_control::{Permission, PermissionEngine, Principal, RoleKey, SuperAdminPolicy};
//!
//! let principal = Principal::new(RoleKey::Doctor);
//! let engine = PermissionEngine::new(&principal, &SuperAdminPolicy::empty());
//!
//! assert!(engine.has_permission(Permission::PatientCreate));
//! assert!(engine.can_access_route("/patients/new"));
//! assert!(!engine.can_access_route("/admin/users"));
//! assert!(engine.can_access_route("/dashboard")); // unguarded, default-allow
//! ```

pub mod audit;
pub mod engine;
pub mod error;
pub mod menu;
pub mod permission;
pub mod principal;
pub mod role;
pub mod routes;

// Re-export commonly used types for convenience
pub use audit::{AccessDecision, DecisionKind};
pub use engine::PermissionEngine;
pub use error::AccessControlError;
pub use menu::MenuItem;
pub use permission::Permission;
pub use principal::{CustomRole, Principal, SuperAdminPolicy};
pub use role::RoleKey;
pub use routes::{guarded_routes, route_requirements};
