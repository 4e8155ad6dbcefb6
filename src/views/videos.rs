use dioxus::prelude::*;

#[component]
pub fn Videos() -> Element {
    rsx! {
        section { id: "videos-page", class: "page",
            h1 { "Videos" }
            p { "Race footage, onboard laps and bike reviews." }
        }
    }
}
