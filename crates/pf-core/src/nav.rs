//! Active-section tracking for the sidebar navigation.

use tracing::{debug, warn};

pub const ROOT_MARGIN: &str = "-40% 0px -50% 0px";
pub const THRESHOLD: f64 = 0.01;
pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    /// Id of the section the link points at, when that section exists.
    pub target: Option<String>,
}

/// `"#about"` → `Some("about")`. Anything that is not a bare fragment
/// reference has no in-page target.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.contains(char::is_whitespace) {
        return None;
    }
    Some(id)
}

#[derive(Clone, Debug, Default)]
pub struct NavTracker {
    links: Vec<NavLink>,
    active: Option<usize>,
}

impl NavTracker {
    /// Builds the tracker from `(href, data-label)` pairs in document order.
    /// `section_exists` resolves a fragment id against the page.
    pub fn resolve<I, F>(links: I, section_exists: F) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
        F: Fn(&str) -> bool,
    {
        let links = links
            .into_iter()
            .map(|(href, label)| {
                let target = fragment_target(&href)
                    .filter(|id| section_exists(id))
                    .map(str::to_owned);
                if target.is_none() {
                    warn!(href = %href, "nav link has no matching section; not observed");
                }
                NavLink {
                    href,
                    label: label.unwrap_or_default(),
                    target,
                }
            })
            .collect();
        Self {
            links,
            active: None,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Section ids to observe, each paired with its link index.
    pub fn observed(&self) -> impl Iterator<Item = (usize, &str)> {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(index, link)| link.target.as_deref().map(|id| (index, id)))
    }

    pub fn active(&self) -> Option<&NavLink> {
        self.active.map(|index| &self.links[index])
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// A section entered the trigger band. Every link is cleared and the one
    /// pointing at `section_id` becomes active. Sections without a link clear
    /// the marker entirely.
    pub fn on_section_entered(&mut self, section_id: &str) -> Option<&NavLink> {
        self.active = self
            .links
            .iter()
            .position(|link| link.target.as_deref() == Some(section_id));
        debug!(section = section_id, active = ?self.active, "section entered");
        self.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(hrefs: &[&str], sections: &[&str]) -> NavTracker {
        NavTracker::resolve(
            hrefs
                .iter()
                .map(|href| (href.to_string(), Some(format!("label {href}")))),
            |id| sections.contains(&id),
        )
    }

    #[test]
    fn fragment_targets() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("resume.pdf"), None);
        assert_eq!(fragment_target("#a b"), None);
    }

    #[test]
    fn missing_sections_are_not_observed() {
        let nav = tracker(&["#home", "#ghost", "#contact"], &["home", "contact"]);
        let observed: Vec<_> = nav.observed().collect();
        assert_eq!(observed, vec![(0, "home"), (2, "contact")]);
        assert_eq!(nav.links().len(), 3);
    }

    #[test]
    fn exactly_one_link_is_active() {
        let sections = ["home", "about", "projects", "contact"];
        let hrefs = ["#home", "#about", "#projects", "#contact"];
        let mut nav = tracker(&hrefs, &sections);

        for (expected, section) in sections.iter().enumerate() {
            let label = nav.on_section_entered(section).map(|link| link.label.clone());
            assert_eq!(label, Some(format!("label {}", hrefs[expected])));
            let active: Vec<usize> = (0..hrefs.len()).filter(|i| nav.is_active(*i)).collect();
            assert_eq!(active, vec![expected]);
        }
    }

    #[test]
    fn unknown_section_clears_marker() {
        let mut nav = tracker(&["#home"], &["home", "footer"]);
        nav.on_section_entered("home");
        assert!(nav.on_section_entered("footer").is_none());
        assert!(!nav.is_active(0));
    }
}
