//! Href checks that warn but never reject.
//!
//! The configuration loader only checks structure. Whether two entries point
//! at the same page, or an href is oddly formed, is reported here so callers
//! can surface it as a warning.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use folio_config::SidebarNode;

use crate::{is_external, normalize_href};

/// A questionable sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    /// Two links resolve to the same page.
    DuplicateHref {
        /// Normalized href.
        href: String,
        /// Location of the first declaration.
        first: String,
        /// Location of the repeated declaration.
        second: String,
    },
    /// Href is neither root-relative nor an absolute URL.
    SuspiciousHref {
        /// Location of the entry.
        location: String,
        /// Href as declared.
        href: String,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateHref {
                href,
                first,
                second,
            } => write!(f, "{second} links to {href}, already linked at {first}"),
            Self::SuspiciousHref { location, href } => write!(
                f,
                "{location} links to {href:?}, expected a path starting with / or an http(s) URL"
            ),
        }
    }
}

/// Check every link in `sidebar`, in reading order.
#[must_use]
pub fn lint(sidebar: &[SidebarNode]) -> Vec<Finding> {
    let mut seen = HashMap::new();
    let mut findings = Vec::new();
    lint_nodes(sidebar, "sidebar", &mut seen, &mut findings);
    findings
}

fn lint_nodes<'a>(
    nodes: &'a [SidebarNode],
    prefix: &str,
    seen: &mut HashMap<&'a str, String>,
    findings: &mut Vec<Finding>,
) {
    for (index, node) in nodes.iter().enumerate() {
        let location = format!("{prefix}[{index}]");
        match node {
            SidebarNode::Group(group) => {
                lint_nodes(&group.items, &format!("{location}.items"), seen, findings);
            }
            SidebarNode::Link(link) => {
                if !link.href.starts_with('/') && !is_external(&link.href) {
                    findings.push(Finding::SuspiciousHref {
                        location: location.clone(),
                        href: link.href.clone(),
                    });
                }

                let href = normalize_href(&link.href);
                match seen.entry(href) {
                    Entry::Occupied(first) => findings.push(Finding::DuplicateHref {
                        href: href.to_owned(),
                        first: first.get().clone(),
                        second: location,
                    }),
                    Entry::Vacant(slot) => {
                        slot.insert(location);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_sidebar_has_no_findings() {
        let sidebar = vec![SidebarNode::group(
            "Getting Started",
            vec![
                SidebarNode::link("Introduction", "/guides/getting-started/"),
                SidebarNode::link("Basic Concepts", "/guides/getting-started/basics"),
                SidebarNode::link("Repo", "https://github.com/robertoHeCi"),
            ],
        )];

        assert!(lint(&sidebar).is_empty());
    }

    #[test]
    fn test_duplicate_href_ignores_trailing_slash() {
        let sidebar = vec![
            SidebarNode::link("Introduction", "/guides/getting-started/"),
            SidebarNode::group(
                "Again",
                vec![SidebarNode::link("Intro", "/guides/getting-started")],
            ),
        ];

        assert_eq!(
            lint(&sidebar),
            vec![Finding::DuplicateHref {
                href: "/guides/getting-started".to_owned(),
                first: "sidebar[0]".to_owned(),
                second: "sidebar[1].items[0]".to_owned(),
            }]
        );
    }

    #[test]
    fn test_duplicate_labels_are_fine() {
        let sidebar = vec![
            SidebarNode::link("Overview", "/a"),
            SidebarNode::link("Overview", "/b"),
        ];

        assert!(lint(&sidebar).is_empty());
    }

    #[test]
    fn test_relative_href_flagged() {
        let findings = lint(&[SidebarNode::link("Basics", "guides/basics")]);

        assert_eq!(
            findings,
            vec![Finding::SuspiciousHref {
                location: "sidebar[0]".to_owned(),
                href: "guides/basics".to_owned(),
            }]
        );
        assert!(findings[0].to_string().contains("sidebar[0]"));
    }

    #[test]
    fn test_display_duplicate() {
        let finding = Finding::DuplicateHref {
            href: "/a".to_owned(),
            first: "sidebar[0]".to_owned(),
            second: "sidebar[2]".to_owned(),
        };

        assert_eq!(
            finding.to_string(),
            "sidebar[2] links to /a, already linked at sidebar[0]"
        );
    }
}
