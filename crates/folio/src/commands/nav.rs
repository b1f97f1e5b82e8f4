//! `folio nav` command implementation.

use clap::Args;
use folio_nav::{NavItem, Pagination, build_navigation, pagination};

use super::LoadArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    load: LoadArgs,

    /// Href of the page being viewed (marks it and shows prev/next).
    #[arg(long)]
    current: Option<String>,

    /// Print JSON instead of an indented tree.
    #[arg(long)]
    json: bool,
}

impl NavArgs {
    /// Execute the nav command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.load.load()?;
        let current = self.current.as_deref();

        let nav = build_navigation(&config.sidebar, current);
        let pages = current.map(|href| pagination(&config.sidebar, href));

        if self.json {
            let value = serde_json::json!({
                "title": config.title,
                "navigation": nav,
                "pagination": pages,
            });
            output.print(&serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        output.heading(&config.title);
        if let Some(tree) = tree_text(&nav) {
            output.print(&tree);
        }

        if let Some(pages) = pages {
            output.print(&render_pagination(pages));
        }

        Ok(())
    }
}

/// Indented tree text, or `None` for an empty sidebar.
fn tree_text(nav: &[NavItem]) -> Option<String> {
    let mut tree = String::new();
    render_tree(nav, 0, &mut tree);
    (!tree.is_empty()).then(|| tree.trim_end().to_owned())
}

/// Render items as an indented tree, one line per item.
///
/// Current items are prefixed with `*`, links show their target.
fn render_tree(items: &[NavItem], depth: usize, out: &mut String) {
    for item in items {
        let marker = if item.current { "* " } else { "  " };
        let indent = "  ".repeat(depth);
        match &item.href {
            Some(href) => out.push_str(&format!("{marker}{indent}{} -> {href}\n", item.label)),
            None => out.push_str(&format!("{marker}{indent}{}/\n", item.label)),
        }
        render_tree(&item.children, depth + 1, out);
    }
}

fn render_pagination(pages: Pagination<'_>) -> String {
    let prev = pages.prev.map_or("-", |link| link.href.as_str());
    let next = pages.next.map_or("-", |link| link.href.as_str());
    format!("prev: {prev}\nnext: {next}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::SidebarNode;
    use pretty_assertions::assert_eq;

    fn sidebar() -> Vec<SidebarNode> {
        vec![SidebarNode::group(
            "Guides",
            vec![SidebarNode::group(
                "Getting Started",
                vec![
                    SidebarNode::link("Introduction", "/guides/getting-started/"),
                    SidebarNode::link("Basic Concepts", "/guides/getting-started/basics"),
                ],
            )],
        )]
    }

    #[test]
    fn test_render_tree() {
        let nav = build_navigation(&sidebar(), Some("/guides/getting-started/basics"));
        let mut out = String::new();

        render_tree(&nav, 0, &mut out);

        assert_eq!(
            out,
            "* Guides/\n\
             *   Getting Started/\n\
             \x20     Introduction -> /guides/getting-started/\n\
             *     Basic Concepts -> /guides/getting-started/basics\n"
        );
    }

    #[test]
    fn test_empty_sidebar_has_no_tree_text() {
        assert_eq!(tree_text(&build_navigation(&[], None)), None);
    }

    #[test]
    fn test_tree_text_drops_trailing_newline() {
        let nav = build_navigation(&[SidebarNode::link("Home", "/")], None);

        assert_eq!(tree_text(&nav), Some("  Home -> /".to_owned()));
    }

    #[test]
    fn test_render_pagination() {
        let sidebar = sidebar();

        assert_eq!(
            render_pagination(pagination(&sidebar, "/guides/getting-started/")),
            "prev: -\nnext: /guides/getting-started/basics"
        );
    }
}
