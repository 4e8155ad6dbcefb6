use crate::nav::Icon;
use dioxus::prelude::*;

/// SVG path data for each glyph, on a 24x24 stroked grid
pub fn glyph_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Home => &[
            "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            "M9 22V12h6v10",
        ],
        Icon::Play => &["M5 3l14 9-14 9V3z"],
        Icon::User => &[
            "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
            "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
        ],
        Icon::Camera => &[
            "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z",
            "M9 13a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
        ],
        Icon::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
        Icon::Youtube => &[
            "M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17",
            "m10 15 5-3-5-3z",
        ],
    }
}

#[component]
pub fn IconGlyph(icon: Icon, class: &'static str) -> Element {
    rsx! {
        svg {
            class,
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in glyph_paths(icon).iter() {
                path { d: *d }
            }
        }
    }
}
