use super::BRAND_NAME;
use super::footer::Footer;
use super::navbar::Navbar;
use crate::Route;
use crate::menu::MenuState;
use crate::shell::ShellModel;
use dioxus::prelude::*;

/// Same width the `min-width` media queries in `main.css` compare against
const VIEWPORT_WIDTH_JS: &str = "return window.innerWidth;";

/// Router layout wrapping every page in the [`PageShell`]
#[component]
pub fn SiteLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        PageShell { current_page: route.page_name(),
            Outlet::<Route> {}
        }
    }
}

/// Header, content slot and footer around `children`
///
/// Owns the mobile menu state. `current_page` only feeds the document title,
/// link highlighting follows the router's current path.
#[component]
pub fn PageShell(#[props(into)] current_page: String, children: Element) -> Element {
    let current_route = use_route::<Route>().to_string();
    let mut menu = use_signal(MenuState::default);
    let mut viewport_width = use_signal(|| None::<f64>);

    let shell = ShellModel::new(&current_route, menu(), viewport_width());
    log::trace!(
        "Rendering shell for {} at {}, active link {:?}",
        current_page,
        current_route,
        shell.active_link().map(|link| link.entry.label)
    );

    rsx! {
        document::Title { "{current_page} | {BRAND_NAME}" }
        div {
            id: "page-shell",
            onresize: move |_| async move {
                match document::eval(VIEWPORT_WIDTH_JS).join::<f64>().await {
                    Ok(width) => viewport_width.set(Some(width)),
                    Err(e) => log::warn!("Could not read viewport width: {:?}", e),
                }
            },
            Navbar {
                links: shell.links.clone(),
                menu_open: shell.mobile_menu_open,
                toggle_icon: shell.toggle_icon,
                on_toggle: move |_| {
                    menu.write().toggle();
                    log::debug!("Mobile menu toggled to {:?}", menu());
                },
                on_select: move |_| {
                    menu.write().select();
                    log::debug!("Navigation entry selected, mobile menu closed");
                },
            }
            main { id: "content", {children} }
            Footer { quick_links: shell.quick_links }
        }
    }
}
