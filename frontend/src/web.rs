//! Browser binding (WASM only).
//!
//! The property inspector page calls these exports when the host hands it
//! theme colors, either directly or as part of the registration info.

use crate::document::{DocumentError, StyleDocument, StyleUpdate};
use crate::injector::{ThemeError, ThemeInjector};
use sdpi_theme_types::{shade_hex, RegistrationInfo};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// The live DOM document.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// The document of the current window.
    pub fn current() -> Result<Self, DocumentError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(DocumentError::NoDocument)?;
        Ok(Self { document })
    }

    /// Wrap a specific document rather than the window's.
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl WebDocument {
    fn create_style(&self, id: &str, css: &str) -> Result<web_sys::Element, DocumentError> {
        let element = self
            .document
            .create_element("style")
            .map_err(|e| DocumentError::CreateFailed(format!("{:?}", e)))?;
        element.set_id(id);
        element.set_text_content(Some(css));
        Ok(element)
    }
}

fn is_style(element: &web_sys::Element) -> bool {
    element.tag_name().eq_ignore_ascii_case("style")
}

impl StyleDocument for WebDocument {
    fn upsert_style(&mut self, id: &str, css: &str) -> Result<StyleUpdate, DocumentError> {
        if let Some(existing) = self.document.get_element_by_id(id) {
            if is_style(&existing) {
                existing.set_text_content(Some(css));
                return Ok(StyleUpdate::Replaced);
            }

            // The id is taken by some other element; swap in a <style>.
            tracing::warn!("Element #{} is <{}>, replacing it", id, existing.tag_name());
            let element = self.create_style(id, css)?;
            existing
                .replace_with_with_node_1(&element)
                .map_err(|e| DocumentError::AttachFailed(format!("{:?}", e)))?;
            return Ok(StyleUpdate::Created);
        }

        let element = self.create_style(id, css)?;
        let attached = match (self.document.head(), self.document.body()) {
            (Some(head), _) => head.append_child(&element),
            (None, Some(body)) => body.append_child(&element),
            (None, None) => {
                return Err(DocumentError::AttachFailed("no head or body".to_string()))
            }
        };
        attached.map_err(|e| DocumentError::AttachFailed(format!("{:?}", e)))?;

        Ok(StyleUpdate::Created)
    }

    fn style_text(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .filter(is_style)
            .and_then(|element| element.text_content())
    }
}

thread_local! {
    static INJECTOR: RefCell<Option<ThemeInjector<WebDocument>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    // Initialize panic handler for better error messages in browser console
    console_error_panic_hook::set_once();

    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();
}

fn with_injector(
    apply: impl FnOnce(&mut ThemeInjector<WebDocument>) -> Result<StyleUpdate, ThemeError>,
) -> Result<(), JsValue> {
    INJECTOR.with(|cell| {
        let mut slot = cell.borrow_mut();
        let mut injector = match slot.take() {
            Some(injector) => injector,
            None => ThemeInjector::new(WebDocument::current().map_err(to_js_error)?),
        };
        let result = apply(&mut injector);
        *slot = Some(injector);
        result.map(|_| ()).map_err(to_js_error)
    })
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    tracing::warn!("Theme update rejected: {}", err);
    JsValue::from_str(&err.to_string())
}

/// Apply the host's color object, given as JSON.
#[wasm_bindgen(js_name = addDynamicStyles)]
pub fn add_dynamic_styles(colors_json: &str) -> Result<(), JsValue> {
    with_injector(|injector| injector.apply_json(colors_json))
}

/// Apply the colors from the registration `info` argument, given as JSON.
#[wasm_bindgen(js_name = applyRegistrationInfo)]
pub fn apply_registration_info(info_json: &str) -> Result<(), JsValue> {
    let info = RegistrationInfo::from_json(info_json).map_err(to_js_error)?;
    with_injector(|injector| injector.apply_registration_info(&info))
}

/// Lighten (positive) or darken (negative) a hex color.
#[wasm_bindgen(js_name = fadeColor)]
pub fn fade_color(color: &str, amount: i32) -> Result<String, JsValue> {
    shade_hex(color, amount)
        .map(|shaded| shaded.to_string())
        .map_err(to_js_error)
}
