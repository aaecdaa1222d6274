use dioxus::prelude::*;
use crate::components::ThemeSwitcher;
use crate::utils::{ use_theme, Theme };

#[component]
pub fn Settings() -> Element {
    let theme = use_theme();
    let description = match theme.current() {
        Theme::Dark => "Dark theme",
        Theme::Light => "Light theme",
    };

    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 { class: "text-2xl font-bold mb-4", "Settings" }
            div {
                class: "settings-row flex items-center justify-between",
                span { "Appearance: {description}" }
                ThemeSwitcher {}
            }
        }
    }
}
