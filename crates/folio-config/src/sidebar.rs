//! Sidebar tree.
//!
//! A sidebar is an ordered list of [`SidebarNode`]s. Each node is either a
//! [`SidebarLink`] (label + href) or a [`SidebarGroup`] (label + nested
//! nodes). Declaration order is rendering order and is never changed.
//!
//! In `folio.toml` an entry is a table with a `label` and exactly one of
//! `link` (alias `href`) or `items`:
//!
//! ```toml
//! [[sidebar]]
//! label = "Guides"
//!
//! [[sidebar.items]]
//! label = "Introduction"
//! link = "/guides/getting-started/"
//! ```

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A sidebar entry: either a group of entries or a single link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarNode {
    /// Labelled group of nested entries.
    Group(SidebarGroup),
    /// Link to a page.
    Link(SidebarLink),
}

/// Labelled group of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub label: String,
    /// Nested entries in declaration order.
    pub items: Vec<SidebarNode>,
}

/// Link entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    /// Link text.
    pub label: String,
    /// Target, relative to the content root (e.g. `/guides/getting-started/`)
    /// or an absolute `http(s)://` URL.
    pub href: String,
}

impl SidebarNode {
    /// Create a link node.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link(SidebarLink {
            label: label.into(),
            href: href.into(),
        })
    }

    /// Create a group node.
    pub fn group(label: impl Into<String>, items: Vec<SidebarNode>) -> Self {
        Self::Group(SidebarGroup {
            label: label.into(),
            items,
        })
    }

    /// Display label of the node.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Group(group) => &group.label,
            Self::Link(link) => &link.label,
        }
    }

    /// The link, if this node is one.
    #[must_use]
    pub fn as_link(&self) -> Option<&SidebarLink> {
        match self {
            Self::Link(link) => Some(link),
            Self::Group(_) => None,
        }
    }

    /// The group, if this node is one.
    #[must_use]
    pub fn as_group(&self) -> Option<&SidebarGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Link(_) => None,
        }
    }
}

/// Depth-first iterator over the links of a sidebar, in reading order.
///
/// Created by [`links`].
#[derive(Debug)]
pub struct Links<'a> {
    stack: Vec<std::slice::Iter<'a, SidebarNode>>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a SidebarLink;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(level) = self.stack.last_mut() {
            match level.next() {
                Some(SidebarNode::Link(link)) => return Some(link),
                Some(SidebarNode::Group(group)) => self.stack.push(group.items.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Iterate over every link in `nodes`, descending into groups.
pub fn links(nodes: &[SidebarNode]) -> Links<'_> {
    Links {
        stack: vec![nodes.iter()],
    }
}

/// Count groups in `nodes`, including nested ones.
#[must_use]
pub fn group_count(nodes: &[SidebarNode]) -> usize {
    nodes
        .iter()
        .filter_map(SidebarNode::as_group)
        .map(|group| 1 + group_count(&group.items))
        .sum()
}

/// Sidebar entry as written in TOML, before its shape is checked.
#[derive(Debug, Deserialize)]
pub(crate) struct SidebarEntryRaw {
    label: Option<String>,
    #[serde(alias = "href")]
    link: Option<String>,
    items: Option<Vec<SidebarEntryRaw>>,
}

impl SidebarEntryRaw {
    /// Convert into a [`SidebarNode`], rejecting entries that are both a
    /// link and a group, or neither.
    ///
    /// `location` is the entry's position, e.g. `sidebar[0].items[2]`.
    pub(crate) fn into_node(self, location: &str) -> Result<SidebarNode, ConfigError> {
        let label = self
            .label
            .ok_or_else(|| ConfigError::Validation(format!("{location}.label is required")))?;

        match (self.link, self.items) {
            (Some(href), None) => Ok(SidebarNode::Link(SidebarLink { label, href })),
            (None, Some(items)) => {
                let items = convert_entries(items, &format!("{location}.items"))?;
                Ok(SidebarNode::Group(SidebarGroup { label, items }))
            }
            (Some(_), Some(_)) => Err(ConfigError::Validation(format!(
                "{location} has both `link` and `items`; an entry is either a link or a group"
            ))),
            (None, None) => Err(ConfigError::Validation(format!(
                "{location} needs either `link` or `items`"
            ))),
        }
    }
}

/// Convert a list of raw entries, naming each by its index under `prefix`.
pub(crate) fn convert_entries(
    entries: Vec<SidebarEntryRaw>,
    prefix: &str,
) -> Result<Vec<SidebarNode>, ConfigError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_node(&format!("{prefix}[{index}]")))
        .collect()
}

/// Check labels and hrefs of `nodes` are non-empty.
pub(crate) fn validate_nodes(nodes: &[SidebarNode], prefix: &str) -> Result<(), ConfigError> {
    for (index, node) in nodes.iter().enumerate() {
        let location = format!("{prefix}[{index}]");
        if node.label().trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{location}.label cannot be empty"
            )));
        }
        match node {
            SidebarNode::Link(link) if link.href.trim().is_empty() => {
                return Err(ConfigError::Validation(format!(
                    "{location}.link cannot be empty"
                )));
            }
            SidebarNode::Link(_) => {}
            SidebarNode::Group(group) => {
                validate_nodes(&group.items, &format!("{location}.items"))?;
            }
        }
    }
    Ok(())
}
