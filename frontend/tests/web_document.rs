#![cfg(target_arch = "wasm32")]

use sdpi_theme_frontend::web::{add_dynamic_styles, WebDocument};
use sdpi_theme_frontend::{DocumentError, StyleDocument, StyleUpdate};
use sdpi_theme_types::DEFAULT_STYLE_ELEMENT_ID;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn remove_by_id(id: &str) {
    while let Some(element) = document().get_element_by_id(id) {
        element.remove();
    }
}

#[wasm_bindgen_test]
fn add_dynamic_styles_keeps_a_single_style_element() {
    remove_by_id(DEFAULT_STYLE_ELEMENT_ID);

    add_dynamic_styles(r##"{"highlightColor": "#3366CC"}"##).unwrap();
    add_dynamic_styles(r##"{"highlightColor": "#F7821BFF"}"##).unwrap();

    let selector = format!("style#{}", DEFAULT_STYLE_ELEMENT_ID);
    let styles = document().query_selector_all(&selector).unwrap();
    assert_eq!(styles.length(), 1);

    let text = styles.item(0).unwrap().text_content().unwrap();
    assert!(text.contains("#F7821BFF"));
    assert!(!text.contains("#3366CC"));

    let head = document().head().unwrap();
    let element = document().get_element_by_id(DEFAULT_STYLE_ELEMENT_ID).unwrap();
    assert!(head.contains(Some(element.as_ref())));
}

#[wasm_bindgen_test]
fn add_dynamic_styles_rejects_bad_color_without_touching_dom() {
    remove_by_id(DEFAULT_STYLE_ELEMENT_ID);

    add_dynamic_styles(r##"{"highlightColor": "#3366CC"}"##).unwrap();
    assert!(add_dynamic_styles(r##"{"highlightColor": "#zz"}"##).is_err());

    let element = document().get_element_by_id(DEFAULT_STYLE_ELEMENT_ID).unwrap();
    assert!(element.text_content().unwrap().contains("#3366CC"));
}

#[wasm_bindgen_test]
fn non_style_element_with_the_id_is_replaced() {
    let id = "sdpi-theme-occupied-id";
    remove_by_id(id);

    let doc = document();
    let div = doc.create_element("div").unwrap();
    div.set_id(id);
    div.set_text_content(Some("placeholder"));
    doc.body().unwrap().append_child(&div).unwrap();

    let mut web = WebDocument::current().unwrap();
    assert_eq!(web.style_text(id), None);

    let update = web.upsert_style(id, "a {\n}\n").unwrap();
    assert_eq!(update, StyleUpdate::Created);

    let matches = doc.query_selector_all(&format!("#{}", id)).unwrap();
    assert_eq!(matches.length(), 1);
    let element = doc.get_element_by_id(id).unwrap();
    assert!(element.tag_name().eq_ignore_ascii_case("style"));
    assert_eq!(web.style_text(id).as_deref(), Some("a {\n}\n"));

    assert_eq!(web.upsert_style(id, "b {\n}\n").unwrap(), StyleUpdate::Replaced);
    assert_eq!(web.style_text(id).as_deref(), Some("b {\n}\n"));

    remove_by_id(id);
}

#[wasm_bindgen_test]
fn document_without_head_or_body_fails_to_attach() {
    let empty = web_sys::Document::new().unwrap();
    let mut web = WebDocument::new(empty);

    let err = web.upsert_style("sdpi-theme-detached", "a {\n}\n").unwrap_err();
    assert!(matches!(&err, DocumentError::AttachFailed(reason) if reason == "no head or body"));
}
