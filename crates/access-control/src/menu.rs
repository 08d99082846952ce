//! Menu tree filtering
//!
//! Navigation menus arrive as externally configured trees. An item may
//! declare permission tokens, a route, both, or neither; filtering keeps
//! an item when it declares no requirement or when the principal passes
//! at least one declared check, and applies the same rule independently
//! at every level of the tree.

use crate::engine::PermissionEngine;
use crate::error::AccessControlError;
use serde::{Deserialize, Serialize};

/// One node of an externally defined navigation tree.
///
/// Permission strings stay raw: menu documents are configuration, and an
/// unknown token in them simply never matches.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub route: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: None,
            permissions: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Load a menu tree from a caller-fetched JSON document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Vec<MenuItem>, AccessControlError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl PermissionEngine {
    /// Keep the items this principal may see, recursing into children.
    ///
    /// An item with no declared permissions and no route is always kept.
    /// One that declares either is kept when its permission tokens pass
    /// `has_any_str` or its route passes `can_access_route`; a kept
    /// parent does not force-keep its children.
    pub fn filter_menu(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        items
            .iter()
            .filter(|item| self.menu_item_visible(item))
            .map(|item| MenuItem {
                children: self.filter_menu(&item.children),
                ..item.clone()
            })
            .collect()
    }

    fn menu_item_visible(&self, item: &MenuItem) -> bool {
        let declares_permissions = !item.permissions.is_empty();
        let declares_route = item.route.is_some();

        if !declares_permissions && !declares_route {
            return true;
        }
        if declares_permissions && self.has_any_str(&item.permissions) {
            return true;
        }
        if let Some(route) = &item.route {
            if self.can_access_route(route) {
                return true;
            }
        }
        false
    }
}
