//! Web interface components for the MX Channel site
//!
//! The page shell (header, content slot, footer) and the page bodies it wraps.

/// Page shell and router layout
mod page_shell;
pub use page_shell::SiteLayout;

/// Top navigation bar
mod navbar;

/// Site footer
mod footer;

/// Inline SVG glyphs
mod icon;

mod home;
pub use home::Home;

mod videos;
pub use videos::Videos;

mod about;
pub use about::About;

mod gallery;
pub use gallery::Gallery;

mod contact;
pub use contact::Contact;

mod not_found;
pub use not_found::PageNotFound;

pub const BRAND_NAME: &str = "MX Channel";
pub const BRAND_TAGLINE: &str = "Follow my motocross journey through high-octane racing, bike reviews, and behind-the-scenes content.";
pub const CONNECT_BLURB: &str = "Subscribe for the latest motocross content and racing updates.";
pub const COPYRIGHT: &str = "© 2024 MX Channel. Built with passion for motocross.";
