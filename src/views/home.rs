use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { id: "home-page", class: "page",
            div { class: "hero",
                h1 { "Ride. Race. Repeat." }
                p { "Race days, practice laps and bike builds from the motocross track." }
                div { class: "hero-actions",
                    Link { to: Route::Videos {}, class: "button primary", "Watch videos" }
                    Link { to: Route::About {}, class: "button", "About me" }
                }
            }
        }
    }
}
