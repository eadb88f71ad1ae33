use dioxus::prelude::*;

#[component]
pub fn HomeComponent() -> Element {
    rsx! {
        div { id: "home-page", class: "page-container",
            h1 { "Welcome!" }
            p { "Log in and open your page from the navigation bar to see your posts." }
        }
    }
}
