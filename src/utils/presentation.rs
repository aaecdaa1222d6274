//! The document-wide attribute that styling rules key off.

use std::collections::HashMap;
use std::sync::{ Arc, Mutex, PoisonError };
use crate::error::ThemeError;

pub const THEME_ATTRIBUTE: &str = "data-theme";

/// A single shared presentation root that carries named attributes.
pub trait PresentationTarget: Send {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// Attributes recorded in memory. Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct MemoryAttribute {
    attributes: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryAttribute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.attributes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}

impl PresentationTarget for MemoryAttribute {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.attributes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// `document.documentElement`, i.e. the `<html>` element.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

#[cfg(target_arch = "wasm32")]
impl DocumentRoot {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> ThemeError {
    ThemeError::Presentation(format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
impl PresentationTarget for DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| ThemeError::Presentation("no document element".to_string()))?;
        root.set_attribute(name, value).map_err(js_error)
    }
}
