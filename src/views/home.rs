use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { 
            class: "container mx-auto p-4",
            h1 { 
                class: "text-2xl font-bold mb-4",
                "Welcome to Lunaria"
            }
            p { 
                class: "text-muted",
                "Your daily horoscope, readable by day or by night."
            }
        }
    }
}
