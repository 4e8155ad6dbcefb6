use dioxus::prelude::*;

#[component]
pub fn Gallery() -> Element {
    rsx! {
        section { id: "gallery-page", class: "page",
            h1 { "Gallery" }
            p { "Shots from the track and the paddock." }
        }
    }
}
