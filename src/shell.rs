//! View model for the page shell
//!
//! Everything the header, the mobile menu and the footer display for one
//! render pass, derived from the current route and the menu state. The
//! Dioxus components in [`crate::views`] only turn this into markup.

use crate::menu::MenuState;
use crate::nav::{Icon, NAV_ENTRIES, NavEntry, active_entry, quick_links};

/// A registry entry as it appears in the header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLinkView {
    pub entry: &'static NavEntry,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellModel {
    /// Every registry entry, in order, for both desktop and mobile navigation
    pub links: Vec<NavLinkView>,
    pub mobile_menu_open: bool,
    pub toggle_icon: Icon,
    pub quick_links: &'static [NavEntry],
}

impl ShellModel {
    pub fn new(current_route: &str, menu: MenuState, viewport_width: Option<f64>) -> Self {
        let active = active_entry(current_route);
        let links = NAV_ENTRIES
            .iter()
            .map(|entry| NavLinkView {
                entry,
                active: active == Some(entry),
            })
            .collect();

        let mobile_menu_open = menu.is_visible(viewport_width);
        let toggle_icon = if mobile_menu_open {
            Icon::Close
        } else {
            Icon::Menu
        };

        ShellModel {
            links,
            mobile_menu_open,
            toggle_icon,
            quick_links: quick_links(),
        }
    }

    /// The highlighted link, if the route matches one
    pub fn active_link(&self) -> Option<&NavLinkView> {
        self.links.iter().find(|link| link.active)
    }
}
