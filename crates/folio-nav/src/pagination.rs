//! Previous/next page links.

use folio_config::{SidebarLink, SidebarNode, links};
use serde::Serialize;

use crate::{is_external, normalize_href};

/// Pages before and after the current one in reading order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pagination<'a> {
    /// Previous page.
    pub prev: Option<&'a SidebarLink>,
    /// Next page.
    pub next: Option<&'a SidebarLink>,
}

/// Internal links of the sidebar in reading order.
///
/// External links are skipped since they are not pages of the site.
#[must_use]
pub fn flatten_links(sidebar: &[SidebarNode]) -> Vec<&SidebarLink> {
    links(sidebar)
        .filter(|link| !is_external(&link.href))
        .collect()
}

/// Find the pages around `current`.
///
/// Returns an empty [`Pagination`] when `current` is not in the sidebar. If
/// the same href is declared twice, the first occurrence wins.
#[must_use]
pub fn pagination<'a>(sidebar: &'a [SidebarNode], current: &str) -> Pagination<'a> {
    let pages = flatten_links(sidebar);
    let current = normalize_href(current);

    let Some(index) = pages
        .iter()
        .position(|link| normalize_href(&link.href) == current)
    else {
        return Pagination::default();
    };

    Pagination {
        prev: index.checked_sub(1).map(|i| pages[i]),
        next: pages.get(index + 1).copied(),
    }
}
