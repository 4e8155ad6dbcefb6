use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { id: "not-found-page", class: "page",
            h1 { "Off track" }
            p { "Nothing lives at {path}." }
            Link { to: Route::Home {}, class: "button primary", "Back to home" }
        }
    }
}
