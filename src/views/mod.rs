mod home;
mod navbar;
mod settings;

pub use home::Home;
pub use navbar::Navbar;
pub use settings::Settings;
