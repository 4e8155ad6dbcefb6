use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about-page", class: "page",
            h1 { "About" }
            p { "Rider, mechanic and the person behind the camera." }
        }
    }
}
