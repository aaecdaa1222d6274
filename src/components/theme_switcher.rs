use dioxus::prelude::*;
use crate::utils::{ use_theme, Theme };

/// Round icon button that flips the theme. Shows a sun while dark, a moon
/// while light.
#[component]
pub fn ThemeSwitcher(#[props(default)] class: String) -> Element {
    let theme = use_theme();
    let current = theme.current();

    let (icon, label, tint) = match current {
        Theme::Dark => ("☀", "Switch to light theme", "text-yellow-400"),
        Theme::Light => ("☾", "Switch to dark theme", "text-slate-700"),
    };

    rsx! {
        button {
            class: "theme-switcher relative h-10 w-10 rounded-full {class}",
            "aria-label": label,
            title: label,
            onclick: move |_| theme.toggle(),
            span {
                class: "text-xl {tint}",
                {icon}
            }
        }
    }
}
