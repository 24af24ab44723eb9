//! Navigation bar state.
//!
//! Every page render marks the link whose target matches the current
//! request path, with query strings stripped from both sides before the
//! comparison.

/// The site's navigation entries, in display order.
const LINKS: &[(&str, &str)] = &[("/", "Home"), ("/cart", "Cart")];

/// One rendered navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Build the navigation links for a page at `current_path`.
#[must_use]
pub fn nav_links(current_path: &str) -> Vec<NavLink> {
    LINKS
        .iter()
        .map(|&(href, label)| NavLink {
            href,
            label,
            active: is_active(current_path, href),
        })
        .collect()
}

/// Whether a link targeting `href` is the current page, ignoring query
/// parameters on either side.
#[must_use]
pub fn is_active(current_path: &str, href: &str) -> bool {
    strip_query(current_path) == strip_query(href)
}

fn strip_query(target: &str) -> &str {
    target.split('?').next().unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_path_matches() {
        assert!(is_active("/cart", "/cart"));
        assert!(!is_active("/cart", "/"));
    }

    #[test]
    fn query_parameters_are_ignored() {
        assert!(is_active("/cart?ref=banner", "/cart"));
        assert!(is_active("/cart", "/cart?tab=items"));
        assert!(is_active("/?utm=mail", "/"));
    }

    #[test]
    fn exactly_one_link_is_active_per_known_page() {
        let links = nav_links("/cart?ref=banner");
        let active: Vec<&str> = links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.href)
            .collect();
        assert_eq!(active, ["/cart"]);
    }

    #[test]
    fn unknown_page_marks_nothing_active() {
        assert!(nav_links("/about").iter().all(|l| !l.active));
    }
}
