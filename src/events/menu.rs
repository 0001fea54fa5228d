use crate::constants::{MENU_OPEN_CLASS, MENU_SELECTOR, MENU_TOGGLE_SELECTOR};
use crate::core::MenuState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct MenuWiring {
    toggle: web::Element,
    menu: web::Element,
    state: Rc<RefCell<MenuState>>,
}

impl MenuWiring {
    /// Class and attribute are both written from the same state value.
    fn sync(&self) {
        let state = *self.state.borrow();
        _ = self
            .menu
            .class_list()
            .toggle_with_force(MENU_OPEN_CLASS, state.is_open());
        _ = self
            .toggle
            .set_attribute("aria-expanded", state.aria_expanded());
    }
}

/// Wire the mobile menu toggle and the outside-click close. Returns false when
/// the page has no toggle or no menu.
pub fn wire_menu_toggle(document: &web::Document) -> bool {
    let (Ok(Some(toggle)), Ok(Some(menu))) = (
        document.query_selector(MENU_TOGGLE_SELECTOR),
        document.query_selector(MENU_SELECTOR),
    ) else {
        return false;
    };
    let w = MenuWiring {
        toggle,
        menu,
        state: Rc::new(RefCell::new(MenuState::default())),
    };
    w.sync();
    wire_toggle_click(&w);
    wire_outside_click(&w, document);
    true
}

fn wire_toggle_click(w: &MenuWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.toggle, "click", move |ev: web::MouseEvent| {
        // keep the document handler below from seeing this click
        ev.stop_propagation();
        let open = w2.state.borrow_mut().toggle();
        w2.sync();
        log::debug!("[menu] open={}", open);
    });
}

fn wire_outside_click(w: &MenuWiring, document: &web::Document) {
    let w = w.clone();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        let inside_menu = dom::event_within(&ev, &w.menu);
        let inside_toggle = dom::event_within(&ev, &w.toggle);
        if w
            .state
            .borrow_mut()
            .close_on_outside_click(inside_menu, inside_toggle)
        {
            w.sync();
        }
    });
}
