use dioxus::prelude::*;
use lunaria::utils::{ use_theme, ThemeProvider };
use lunaria::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            let message = wasm_bindgen::JsValue::from(format!("logger init failed: {e}"));
            web_sys::console::error_1(&message);
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeProvider {
            Shell {}
        }
    }
}

#[component]
fn Shell() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "app",
            "data-theme": theme.current().as_str(),
            Router::<Route> {}
        }
    }
}
