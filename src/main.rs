mod menu;
mod nav;
mod shell;
mod views;

use dioxus::prelude::*;
use views::{About, Contact, Gallery, Home, PageNotFound, SiteLayout, Videos};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/videos")]
        Videos {},
        #[route("/about")]
        About {},
        #[route("/gallery")]
        Gallery {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl Route {
    /// Human readable page name, used in the document title
    pub fn page_name(&self) -> &'static str {
        match self {
            Route::Home {} => "Home",
            Route::Videos {} => "Videos",
            Route::About {} => "About",
            Route::Gallery {} => "Gallery",
            Route::Contact {} => "Contact",
            Route::PageNotFound { .. } => "Not Found",
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind IP, defaults to the address handed over by the Dioxus CLI
    #[arg(long)]
    ip: Option<String>,
    /// Bind port, defaults to the port handed over by the Dioxus CLI
    #[arg(long)]
    port: Option<u16>,
}

#[cfg(feature = "server")]
impl Args {
    fn address(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
        let mut address = dioxus_cli_config::fullstack_address_or_localhost();
        if let Some(ip) = &self.ip {
            address.set_ip(ip.parse()?);
        }
        if let Some(port) = self.port {
            address.set_port(port);
        }
        Ok(address)
    }
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();

    let args = Args::parse();
    let address = args.address()?;

    let router = axum::Router::new().serve_dioxus_application(ServeConfigBuilder::default(), App);
    let listener = tokio::net::TcpListener::bind(address).await?;

    log::info!(
        "MX Channel is up, visit {}",
        format! {"http://{}", listener.local_addr()?}
    );

    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(test)]
mod tests {
    use super::Route;
    use crate::nav::{NAV_ENTRIES, active_entry};

    #[test]
    fn test_registry_paths_are_routes() {
        for entry in NAV_ENTRIES.iter() {
            let route: Route = entry.path.parse().unwrap();
            assert!(!matches!(route, Route::PageNotFound { .. }));
            assert_eq!(route.to_string(), entry.path);
            assert_eq!(route.page_name(), entry.label);
        }
    }

    #[test]
    fn test_nested_path_is_not_found() {
        let route: Route = "/videos/highlights".parse().unwrap();
        match &route {
            Route::PageNotFound { segments } => {
                assert_eq!(segments, &vec!["videos".to_string(), "highlights".to_string()]);
            }
            other => panic!("unexpected route {:?}", other),
        }
        assert!(active_entry(&route.to_string()).is_none());
        assert_eq!(route.page_name(), "Not Found");
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Videos {}.to_string(), "/videos");
        assert_eq!(active_entry(&Route::Videos {}.to_string()).unwrap().label, "Videos");
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_args_parsing() {
        use super::Args;
        use clap::Parser;
        let args = Args::parse_from(vec!["mx-channel", "--ip", "0.0.0.0", "--port", "8080"]);
        assert_eq!(args.ip.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.address().unwrap(), "0.0.0.0:8080".parse::<std::net::SocketAddr>().unwrap());
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_args_parsing_defaults() {
        use super::Args;
        use clap::Parser;
        let args = Args::parse_from(vec!["mx-channel"]);
        assert!(args.ip.is_none());
        assert!(args.port.is_none());
        assert_eq!(
            args.address().unwrap(),
            dioxus_cli_config::fullstack_address_or_localhost()
        );
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_args_bad_ip() {
        use super::Args;
        use clap::Parser;
        let args = Args::parse_from(vec!["mx-channel", "--ip", "not-an-ip"]);
        assert!(args.address().is_err());
    }
}
