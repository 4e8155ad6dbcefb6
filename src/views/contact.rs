use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact-page", class: "page",
            h1 { "Contact" }
            p { "Sponsorships, collaborations or just talking bikes." }
        }
    }
}
