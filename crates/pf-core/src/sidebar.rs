//! Sidebar state machines.
//!
//! Two independent machines share the sidebar element:
//! collapse (`expanded` ⇄ `collapsed`, desktop, persisted) and
//! open (`closed` ⇄ `open`, narrow viewports, transient).

use pf_types::SIDEBAR_COLLAPSED_KEY;
use tracing::debug;

use crate::store::PreferenceStore;

pub const COLLAPSED_CLASS: &str = "collapsed";
pub const BODY_COLLAPSED_CLASS: &str = "sidebar-collapsed";
pub const OPEN_CLASS: &str = "open";
pub const ANNOUNCEMENT_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Collapse {
    #[default]
    Expanded,
    Collapsed,
}

impl Collapse {
    pub fn is_collapsed(self) -> bool {
        self == Collapse::Collapsed
    }

    /// Tooltip for the toggle: what the next click does.
    pub fn tooltip(self) -> &'static str {
        match self {
            Collapse::Collapsed => "Expand sidebar",
            Collapse::Expanded => "Collapse sidebar",
        }
    }

    /// Screen reader announcement of the state just entered.
    pub fn announcement(self) -> &'static str {
        match self {
            Collapse::Collapsed => "Sidebar collapsed",
            Collapse::Expanded => "Sidebar expanded",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileNav {
    #[default]
    Closed,
    Open,
}

impl MobileNav {
    pub fn is_open(self) -> bool {
        self == MobileNav::Open
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarController {
    collapse: Collapse,
    nav: MobileNav,
}

impl SidebarController {
    pub fn load(store: &impl PreferenceStore) -> Self {
        let collapse = match store.get(SIDEBAR_COLLAPSED_KEY).as_deref() {
            Some("true") => Collapse::Collapsed,
            _ => Collapse::Expanded,
        };
        Self {
            collapse,
            nav: MobileNav::Closed,
        }
    }

    pub fn collapse(&self) -> Collapse {
        self.collapse
    }

    pub fn nav(&self) -> MobileNav {
        self.nav
    }

    pub fn toggle_collapse(&mut self, store: &impl PreferenceStore) -> Collapse {
        self.collapse = match self.collapse {
            Collapse::Expanded => Collapse::Collapsed,
            Collapse::Collapsed => Collapse::Expanded,
        };
        let stored = if self.collapse.is_collapsed() { "true" } else { "false" };
        store.set(SIDEBAR_COLLAPSED_KEY, stored);
        debug!(collapsed = self.collapse.is_collapsed(), "sidebar collapse toggled");
        self.collapse
    }

    pub fn toggle_nav(&mut self) -> MobileNav {
        self.nav = match self.nav {
            MobileNav::Closed => MobileNav::Open,
            MobileNav::Open => MobileNav::Closed,
        };
        self.nav
    }

    /// A navigation link was followed. On narrow viewports the menu is forced
    /// closed; returns whether the DOM must be rewritten.
    pub fn close_for_link(&mut self, narrow_viewport: bool) -> bool {
        if !narrow_viewport {
            return false;
        }
        self.nav = MobileNav::Closed;
        true
    }

    /// Escape only has an effect while the menu is open.
    pub fn close_on_escape(&mut self) -> bool {
        self.close_if_open()
    }

    /// The viewport grew past the breakpoint: an open mobile menu would stay
    /// stuck open with no visible toggle, so it is closed.
    pub fn close_for_resize(&mut self, narrow_viewport: bool) -> bool {
        if narrow_viewport {
            return false;
        }
        self.close_if_open()
    }

    fn close_if_open(&mut self) -> bool {
        if !self.nav.is_open() {
            return false;
        }
        self.nav = MobileNav::Closed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn collapse_survives_reload() {
        let store = MemoryStore::default();
        let mut sidebar = SidebarController::load(&store);
        assert_eq!(sidebar.collapse(), Collapse::Expanded);

        assert_eq!(sidebar.toggle_collapse(&store), Collapse::Collapsed);
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY).as_deref(), Some("true"));

        let reloaded = SidebarController::load(&store);
        assert!(reloaded.collapse().is_collapsed());
        assert_eq!(reloaded.nav(), MobileNav::Closed);
    }

    #[test]
    fn expanding_persists_false() {
        let store = MemoryStore::with(&[(SIDEBAR_COLLAPSED_KEY, "true")]);
        let mut sidebar = SidebarController::load(&store);
        assert_eq!(sidebar.toggle_collapse(&store), Collapse::Expanded);
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY).as_deref(), Some("false"));
        assert_eq!(sidebar.collapse().tooltip(), "Collapse sidebar");
        assert_eq!(sidebar.collapse().announcement(), "Sidebar expanded");
    }

    #[test]
    fn link_click_closes_only_on_narrow_viewports() {
        let mut sidebar = SidebarController::default();
        sidebar.toggle_nav();

        assert!(!sidebar.close_for_link(false));
        assert!(sidebar.nav().is_open());

        assert!(sidebar.close_for_link(true));
        assert_eq!(sidebar.nav().aria_expanded(), "false");
    }

    #[test]
    fn escape_is_a_no_op_when_closed() {
        let mut sidebar = SidebarController::default();
        assert!(!sidebar.close_on_escape());

        assert_eq!(sidebar.toggle_nav(), MobileNav::Open);
        assert_eq!(sidebar.nav().aria_expanded(), "true");
        assert!(sidebar.close_on_escape());
        assert!(!sidebar.nav().is_open());
    }

    #[test]
    fn widening_viewport_closes_open_menu() {
        let mut sidebar = SidebarController::default();
        sidebar.toggle_nav();
        assert!(!sidebar.close_for_resize(true));
        assert!(sidebar.close_for_resize(false));
        assert!(!sidebar.close_for_resize(false));
    }
}
