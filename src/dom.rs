use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CANVAS_HEIGHT;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Every element matching `selector`, cast to `T`; non-matching types are skipped.
pub fn query_all<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Attach a typed listener that lives for the rest of the page.
pub fn add_listener<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Whether the event's target node sits inside `container` (inclusive).
pub fn event_within(ev: &web::Event, container: &web::Element) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}

/// Match the canvas backing store to its laid-out width and the fixed height.
/// Returns the new (width, height) in canvas pixels.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let w = canvas.offset_width().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(CANVAS_HEIGHT);
    (w, CANVAS_HEIGHT)
}

/// Put the current calendar year into the footer, if it has a slot for it.
pub fn fill_year(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
