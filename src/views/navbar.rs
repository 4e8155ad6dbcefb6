use super::BRAND_NAME;
use super::icon::IconGlyph;
use crate::nav::{HOME_PATH, Icon};
use crate::shell::NavLinkView;
use dioxus::prelude::*;

/// Fixed top bar: brand mark, desktop links, mobile toggle and mobile menu
#[component]
pub fn Navbar(
    links: Vec<NavLinkView>,
    menu_open: bool,
    toggle_icon: Icon,
    on_toggle: EventHandler<MouseEvent>,
    on_select: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        nav { id: "navbar",
            div { class: "nav-inner",
                div { class: "nav-bar",
                    Link { to: HOME_PATH, class: "brand",
                        BrandMark {}
                        span { class: "brand-name", "{BRAND_NAME}" }
                    }

                    div { class: "nav-desktop",
                        for link in links.iter() {
                            Link {
                                key: "{link.entry.label}",
                                to: link.entry.path,
                                class: link_class("nav-link", link.active),
                                IconGlyph { icon: link.entry.icon, class: "icon-sm" }
                                span { class: "nav-label", "{link.entry.label}" }
                            }
                        }
                    }

                    button {
                        class: "menu-toggle",
                        r#type: "button",
                        "aria-label": "Toggle navigation",
                        "aria-expanded": "{menu_open}",
                        onclick: move |evt| on_toggle.call(evt),
                        IconGlyph { icon: toggle_icon, class: "icon-md" }
                    }
                }

                if menu_open {
                    div { class: "nav-mobile",
                        for link in links.iter() {
                            Link {
                                key: "{link.entry.label}",
                                to: link.entry.path,
                                class: link_class("nav-mobile-link", link.active),
                                onclick: move |evt| on_select.call(evt),
                                IconGlyph { icon: link.entry.icon, class: "icon-md" }
                                span { class: "nav-label", "{link.entry.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Gradient tile with the channel glyph, shared with the footer
#[component]
pub fn BrandMark() -> Element {
    rsx! {
        div { class: "brand-mark",
            IconGlyph { icon: Icon::Youtube, class: "icon-md" }
        }
    }
}

fn link_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_class() {
        assert_eq!(link_class("nav-link", true), "nav-link active");
        assert_eq!(link_class("nav-link", false), "nav-link");
    }
}
