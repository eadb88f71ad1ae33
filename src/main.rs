mod backend;
mod components;

use backend::{ClientConfig, HttpApi};
use components::home_page::HomeComponent;
use components::nav_bar::NavComponent;
use components::user_page::UserPageComponent;

use dioxus::prelude::*;
use tracing::error;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavComponent)]
    #[route("/")]
    HomeComponent {},
    #[route("/user-page.html?:..query")]
    UserPageComponent { query: String },
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
    #[cfg(target_arch = "wasm32")]
    let _ = dioxus::logger::init(tracing::Level::INFO);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let api = use_resource(|| async { ClientConfig::resolve().await.map(HttpApi::new) });

    let content = match &*api.read() {
        Some(Ok(api)) => rsx! { ApiProvider { api: api.clone() } },
        Some(Err(e)) => {
            error!("could not configure backend: {}", e);
            rsx! { p { class: "error", "Could not reach the server." } }
        }
        None => rsx! {},
    };

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        {content}
    }
}

/// Makes the backend client available to every page below the router.
#[component]
fn ApiProvider(api: HttpApi) -> Element {
    use_context_provider(|| api.clone());
    rsx! {
        Router::<Route> {}
    }
}
