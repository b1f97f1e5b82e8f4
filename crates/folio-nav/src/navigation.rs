//! Navigation tree builder.
//!
//! Builds [`NavItem`] trees from the sidebar for UI presentation. The tree
//! mirrors the sidebar exactly: same order, same nesting, nothing added or
//! dropped.

use folio_config::SidebarNode;
use serde::Serialize;

use crate::{is_external, normalize_href};

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// Link target; `None` for groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Link leaves the site.
    #[serde(skip_serializing_if = "is_false")]
    pub external: bool,
    /// Link is the current page, or group contains it.
    #[serde(skip_serializing_if = "is_false")]
    pub current: bool,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !value
}

/// Build navigation tree from the sidebar.
///
/// When `current` is given, the link whose href matches it (ignoring
/// trailing slashes) is marked current, and so is every group above it.
///
/// # Arguments
///
/// * `sidebar` - Sidebar nodes in declaration order
/// * `current` - Href of the page being viewed
#[must_use]
pub fn build_navigation(sidebar: &[SidebarNode], current: Option<&str>) -> Vec<NavItem> {
    let current = current.map(normalize_href);
    sidebar
        .iter()
        .map(|node| build_nav_item(node, current))
        .collect()
}

/// Recursively build [`NavItem`] from a sidebar node.
fn build_nav_item(node: &SidebarNode, current: Option<&str>) -> NavItem {
    match node {
        SidebarNode::Link(link) => NavItem {
            label: link.label.clone(),
            href: Some(link.href.clone()),
            external: is_external(&link.href),
            current: current == Some(normalize_href(&link.href)),
            children: Vec::new(),
        },
        SidebarNode::Group(group) => {
            let children: Vec<_> = group
                .items
                .iter()
                .map(|child| build_nav_item(child, current))
                .collect();
            NavItem {
                label: group.label.clone(),
                href: None,
                external: false,
                current: children.iter().any(|child| child.current),
                children,
            }
        }
    }
}
