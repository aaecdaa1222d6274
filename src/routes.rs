use dioxus::prelude::*;
use crate::views::{ Home, Navbar, Settings };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[route("/settings")]
    Settings,
}
