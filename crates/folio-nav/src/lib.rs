//! Navigation view over the configured sidebar.
//!
//! The sidebar in [`folio_config::SiteConfig`] is declarative. This crate is
//! its consumer side: it builds the navigation tree shown next to a page,
//! finds previous/next pages in reading order, and reports hrefs that look
//! wrong without rejecting the configuration.
//!
//! # Example
//!
//! ```
//! use folio_config::SidebarNode;
//! use folio_nav::build_navigation;
//!
//! let sidebar = vec![SidebarNode::group(
//!     "Guides",
//!     vec![SidebarNode::link("Introduction", "/guides/getting-started/")],
//! )];
//!
//! let nav = build_navigation(&sidebar, Some("/guides/getting-started"));
//! assert_eq!(nav[0].label, "Guides");
//! assert!(nav[0].current);
//! assert!(nav[0].children[0].current);
//! ```

mod lint;
mod navigation;
mod pagination;

pub use lint::{Finding, lint};
pub use navigation::{NavItem, build_navigation};
pub use pagination::{Pagination, flatten_links, pagination};

/// Whether `href` points outside the site.
#[must_use]
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Normalize an internal href for comparison.
///
/// Trailing slashes are insignificant: `/guides/` and `/guides` name the same
/// page. External hrefs are returned unchanged.
#[must_use]
pub fn normalize_href(href: &str) -> &str {
    if is_external(href) {
        return href;
    }
    match href.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
