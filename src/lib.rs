mod views;
mod components;
pub mod utils;
mod routes;
mod configs;
pub mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::components::ThemeSwitcher;
pub use crate::configs::get_preferences_path;
pub use crate::error::ThemeError;
