use super::navbar::BrandMark;
use super::{BRAND_NAME, BRAND_TAGLINE, CONNECT_BLURB, COPYRIGHT};
use super::icon::IconGlyph;
use crate::nav::{Icon, NavEntry};
use dioxus::prelude::*;

#[component]
pub fn Footer(quick_links: &'static [NavEntry]) -> Element {
    rsx! {
        footer { id: "footer",
            div { class: "footer-inner",
                div { class: "footer-grid",
                    div { class: "footer-about",
                        div { class: "brand",
                            BrandMark {}
                            span { class: "brand-name", "{BRAND_NAME}" }
                        }
                        p { "{BRAND_TAGLINE}" }
                    }

                    div { class: "footer-links",
                        h3 { "Quick Links" }
                        for entry in quick_links.iter() {
                            Link { key: "{entry.label}", to: entry.path, class: "footer-link",
                                "{entry.label}"
                            }
                        }
                    }

                    div { class: "footer-connect",
                        h3 { "Connect" }
                        p { "{CONNECT_BLURB}" }
                        div { class: "social-tile",
                            IconGlyph { icon: Icon::Youtube, class: "icon-md" }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { "{COPYRIGHT}" }
                }
            }
        }
    }
}
