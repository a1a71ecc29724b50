use log::{debug, warn};
use url::Url;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};

/// Resolves a link's `href` against its base URI and returns its path.
pub fn link_path(href: &str, base_uri: &str) -> Option<String> {
    let base = Url::parse(base_uri).ok()?;
    let resolved = base.join(href).ok()?;
    Some(resolved.path().to_string())
}

pub fn is_active(href: &str, base_uri: &str, current_path: &str) -> bool {
    link_path(href, base_uri).as_deref() == Some(current_path)
}

/// Marks every `.nav-link` pointing at the current page as `active`.
pub fn highlight_active_links() {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let Ok(current_path) = window.location().pathname() else {
        warn!("Could not read the current location");
        return;
    };

    let links = match document.query_selector_all(".nav-link") {
        Ok(links) => links,
        Err(_) => return,
    };

    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        // `base_uri` honours a `<base>` element, like the browser's own `link.href`.
        let base_uri = link.base_uri().ok().flatten();
        let active = match (link.get_attribute("href"), base_uri) {
            (Some(href), Some(base)) => is_active(&href, &base, &current_path),
            _ => false,
        };
        if link.class_list().toggle_with_force("active", active).is_err() {
            warn!("Could not toggle active state on nav link {}", i);
        }
    }
    debug!("Highlighted nav links for {}", current_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "http://localhost:5000/campaigns/new";

    #[test]
    fn absolute_and_relative_links_resolve_to_paths() {
        assert_eq!(link_path("/contacts", PAGE).as_deref(), Some("/contacts"));
        assert_eq!(
            link_path("http://localhost:5000/campaigns/new?x=1", PAGE).as_deref(),
            Some("/campaigns/new")
        );
        assert_eq!(link_path("edit", PAGE).as_deref(), Some("/campaigns/edit"));
    }

    #[test]
    fn only_exact_path_matches_are_active() {
        let current = "/campaigns/new";
        let links = ["/", "/campaigns", "/campaigns/new", "/campaigns/new/", "/campaigns/new#top"];
        let active: Vec<_> = links
            .iter()
            .filter(|href| is_active(href, PAGE, current))
            .collect();
        assert_eq!(active, [&"/campaigns/new", &"/campaigns/new#top"]);
    }

    #[test]
    fn relative_links_follow_the_base_element() {
        let base = "http://localhost:5000/app/";
        assert_eq!(link_path("campaigns/new", base).as_deref(), Some("/app/campaigns/new"));
        assert!(is_active("campaigns/new", base, "/app/campaigns/new"));
        assert!(!is_active("campaigns/new", PAGE, "/app/campaigns/new"));
    }

    #[test]
    fn unparseable_page_url_matches_nothing() {
        assert!(!is_active("/campaigns/new", "not a url", "/campaigns/new"));
    }
}
