use dioxus::prelude::*;
use tracing::warn;
use crate::Route;
use crate::backend::{HttpApi, UserPageApi};
use crate::backend::controller::user_page_query;

#[component]
pub fn NavComponent() -> Element {
    let api = use_context::<HttpApi>();

    // Login status drives which links we show; a failed lookup looks logged out.
    let login_status = use_resource(move || {
        let api = api.clone();
        async move {
            match api.login_status().await {
                Ok(status) => status,
                Err(e) => {
                    warn!("navigation could not fetch login status: {}", e);
                    Default::default()
                }
            }
        }
    });

    let own_page = login_status
        .read()
        .as_ref()
        .filter(|status| status.is_logged_in)
        .map(|status| status.username.clone().unwrap_or_default());

    rsx! {
        nav { id: "navigation",
            Link {
                to: Route::HomeComponent {},
                id: "nav-home",
                "Home"
            }

            if let Some(username) = own_page {
                Link {
                    to: Route::UserPageComponent { query: user_page_query(&username) },
                    id: "nav-user-page",
                    "Your Page"
                }
                a { href: "/logout", id: "nav-logout", "Logout" }
            } else {
                a { href: "/login", id: "nav-login", "Login" }
            }
        }
        Outlet::<Route> {}
    }
}
