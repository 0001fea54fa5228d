use crate::constants::{
    CONTACT_MSG_ID, FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME, SUBMIT_DELAY_MS,
};
use crate::core::{Begin, ContactFields, ContactForm};
use crate::{dom, status};
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn read_fields(form: &web::HtmlFormElement) -> anyhow::Result<ContactFields> {
    let data = web::FormData::new_with_form(form).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactFields {
        name: field(FIELD_NAME),
        email: field(FIELD_EMAIL),
        message: field(FIELD_MESSAGE),
    })
}

/// Intercept submits on `form`: validate, fake the round trip, report, then
/// `reset()` the form element, which is what empties the inputs.
pub fn wire_contact_form(document: &web::Document, form: web::HtmlFormElement) {
    let controller = Rc::new(RefCell::new(ContactForm::default()));
    let doc = document.clone();
    let form_el = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        controller.borrow_mut().acknowledge();

        let fields = match read_fields(&form_el) {
            Ok(f) => f,
            Err(e) => {
                log::error!("[form] could not read fields: {:?}", e);
                let msg = controller.borrow_mut().fail(e.to_string());
                status::show(&doc, CONTACT_MSG_ID, msg);
                return;
            }
        };

        let begin = controller.borrow_mut().begin(&fields);
        match begin {
            Begin::Busy => {
                log::debug!("[form] ignored submit, phase={:?}", controller.borrow().phase());
            }
            Begin::Rejected(msg) => status::show(&doc, CONTACT_MSG_ID, msg),
            Begin::Sending(msg) => {
                status::show(&doc, CONTACT_MSG_ID, msg);
                let controller = controller.clone();
                let doc = doc.clone();
                let form_el = form_el.clone();
                spawn_local(async move {
                    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                    let msg = controller.borrow_mut().complete();
                    form_el.reset();
                    status::show(&doc, CONTACT_MSG_ID, msg);
                    log::info!("[form] message sent");
                });
            }
        }
    });
}
