use crate::constants::TILT_SELECTOR;
use crate::core::{TiltOffset, TILT_RESET};
use crate::dom;
use web_sys as web;

/// Attach pointer tilt to every `[data-tilt]` card. Returns how many were wired.
pub fn wire_tilt_cards(document: &web::Document) -> usize {
    let cards: Vec<web::HtmlElement> = dom::query_all(document, TILT_SELECTOR);
    for card in &cards {
        wire_mousemove(card);
        wire_mouseleave(card);
    }
    cards.len()
}

fn wire_mousemove(card: &web::HtmlElement) {
    let el = card.clone();
    dom::add_listener(card, "mousemove", move |ev: web::MouseEvent| {
        let rect = el.get_bounding_client_rect();
        let Some(offset) = TiltOffset::from_pointer(
            ev.client_x() as f32,
            ev.client_y() as f32,
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ) else {
            return;
        };
        _ = el.style().set_property("transform", &offset.transform());
    });
}

fn wire_mouseleave(card: &web::HtmlElement) {
    let el = card.clone();
    dom::add_listener(card, "mouseleave", move |_ev: web::MouseEvent| {
        _ = el.style().set_property("transform", TILT_RESET);
    });
}
