use tracing::debug;

pub const ALL: &str = "all";
pub const ACTIVE_CLASS: &str = "active";
pub const CARD_ENTRANCE_ANIMATION: &str = "fadeInUp 0.5s ease forwards";

/// A button without `data-filter` matches the cards without `data-category`.
pub fn shows(filter: Option<&str>, category: Option<&str>) -> bool {
    filter == Some(ALL) || category == filter
}

/// Keys that activate a focused filter button, as `KeyboardEvent.key`.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[derive(Clone, Debug)]
pub struct ProjectFilter {
    selected: Option<String>,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            selected: Some(ALL.to_owned()),
        }
    }
}

impl ProjectFilter {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Switches the filter and returns the visibility of each card, in the
    /// order of `categories`.
    pub fn select<'a, I>(&mut self, filter: Option<&str>, categories: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        self.selected = filter.map(str::to_owned);
        let visible: Vec<bool> = categories
            .into_iter()
            .map(|category| shows(filter, category))
            .collect();
        debug!(
            filter = filter.unwrap_or_default(),
            shown = visible.iter().filter(|shown| **shown).count(),
            "project filter applied"
        );
        visible
    }
}
