// Make common test utilities available
pub mod common;
mod theme_store;
