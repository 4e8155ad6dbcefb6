//! Navigation entry registry
//!
//! The five top-level pages of the site, defined once and shared by the
//! header and the footer.

/// Glyph drawn next to a label or inside a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Play,
    User,
    Camera,
    Mail,
    Menu,
    Close,
    Youtube,
}

/// One top-level page link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
}

impl NavEntry {
    /// Exact path equality, `/videos/clip` does not activate `/videos`
    pub fn is_active(&self, current_route: &str) -> bool {
        self.path == current_route
    }
}

pub const NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry {
        label: "Home",
        path: "/",
        icon: Icon::Home,
    },
    NavEntry {
        label: "Videos",
        path: "/videos",
        icon: Icon::Play,
    },
    NavEntry {
        label: "About",
        path: "/about",
        icon: Icon::User,
    },
    NavEntry {
        label: "Gallery",
        path: "/gallery",
        icon: Icon::Camera,
    },
    NavEntry {
        label: "Contact",
        path: "/contact",
        icon: Icon::Mail,
    },
];

/// Number of entries repeated in the footer
pub const QUICK_LINK_COUNT: usize = 3;

/// Where the brand mark links to
pub const HOME_PATH: &str = NAV_ENTRIES[0].path;

/// Footer quick links, the head of the registry in registry order
pub fn quick_links() -> &'static [NavEntry] {
    &NAV_ENTRIES[..QUICK_LINK_COUNT]
}

/// Returns the entry matching `current_route`, if any
pub fn active_entry(current_route: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES
        .iter()
        .find(|entry| entry.is_active(current_route))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let expected = [
            ("Home", "/", Icon::Home),
            ("Videos", "/videos", Icon::Play),
            ("About", "/about", Icon::User),
            ("Gallery", "/gallery", Icon::Camera),
            ("Contact", "/contact", Icon::Mail),
        ];
        assert_eq!(NAV_ENTRIES.len(), expected.len());
        for (entry, (label, path, icon)) in NAV_ENTRIES.iter().zip(expected) {
            assert_eq!(entry.label, label);
            assert_eq!(entry.path, path);
            assert_eq!(entry.icon, icon);
        }
    }

    #[test]
    fn test_active_entry_exact_match() {
        for entry in NAV_ENTRIES.iter() {
            let active = active_entry(entry.path).unwrap();
            assert_eq!(active, entry);
            let others = NAV_ENTRIES.iter().filter(|e| e.is_active(entry.path));
            assert_eq!(others.count(), 1);
        }
    }

    #[test]
    fn test_active_entry_no_match() {
        assert!(active_entry("/shop").is_none());
        assert!(active_entry("").is_none());
        // no prefix or case folding
        assert!(active_entry("/videos/highlights").is_none());
        assert!(active_entry("/Videos").is_none());
        assert!(active_entry("/videos/").is_none());
    }

    #[test]
    fn test_quick_links() {
        let labels: Vec<&str> = quick_links().iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Home", "Videos", "About"]);
        assert_eq!(quick_links(), &NAV_ENTRIES[..3]);
    }

    #[test]
    fn test_home_path() {
        assert_eq!(HOME_PATH, "/");
    }
}
