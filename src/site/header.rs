//! Fixed header: nav links, scroll style and the mobile menu

use serde::Serialize;

use crate::utils::constants::HEADER_SCROLL_THRESHOLD_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { href: "#about", label: "About" },
    NavItem { href: "#projects", label: "Projects" },
    NavItem { href: "#skills", label: "Skills" },
    NavItem { href: "#contact", label: "Contact" },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    scrolled: bool,
    mobile_menu_open: bool,
}

impl HeaderState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > HEADER_SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Follow a nav link; returns the anchor id to scroll to and closes the menu
    pub fn select(&mut self, item: &NavItem) -> &'static str {
        self.mobile_menu_open = false;
        item.href.trim_start_matches('#')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        let mut header = HeaderState::default();
        header.on_scroll(50.0);
        assert!(!header.is_scrolled());
        header.on_scroll(50.5);
        assert!(header.is_scrolled());
        header.on_scroll(0.0);
        assert!(!header.is_scrolled());
    }

    #[test]
    fn test_select_closes_menu() {
        let mut header = HeaderState::default();
        header.toggle_menu();
        assert!(header.is_menu_open());

        let anchor = header.select(&NAV_ITEMS[1]);
        assert_eq!(anchor, "projects");
        assert!(!header.is_menu_open());
    }
}
