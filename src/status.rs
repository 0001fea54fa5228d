use crate::core::StatusMessage;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Overwrite the status line with `msg`: text, palette, and make it visible.
/// A page without the element just gets nothing.
pub fn show(document: &web::Document, element_id: &str, msg: StatusMessage) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    el.set_text_content(Some(msg.text));
    if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
        let style = html.style();
        _ = style.set_property("display", "block");
        _ = style.set_property("color", msg.color());
    }
}
