//! Mobile menu state
//!
//! The collapsible navigation shown under the header on narrow viewports.

/// Viewport width (px) from which the desktop navigation takes over
///
/// Must stay in sync with the media query in `assets/main.css`.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Flips between open and closed
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// A navigation entry was chosen, the menu always closes
    pub fn select(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Whether the menu is actually shown for a viewport of `viewport_width`
    ///
    /// An unknown width counts as mobile.
    pub fn is_visible(self, viewport_width: Option<f64>) -> bool {
        self.is_open() && viewport_width.is_none_or(|width| width < MOBILE_BREAKPOINT_PX)
    }
}
