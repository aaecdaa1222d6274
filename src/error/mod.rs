mod theme;

pub use theme::ThemeError;
