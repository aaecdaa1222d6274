use dioxus::prelude::*;
use crate::components::ThemeSwitcher;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "navbar shadow-lg transition-colors duration-200",
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    div {
                        class: "flex items-center space-x-6",
                        Link { class: "nav-link", to: Route::Home, "Home" }
                        Link { class: "nav-link", to: Route::Settings, "Settings" }
                    }
                    ThemeSwitcher { class: "navbar-switcher".to_string() }
                }
            }
            Outlet::<Route> {}
        }
    }
}
