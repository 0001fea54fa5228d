use crate::core::ParticleField;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut field = self.field.borrow_mut();
        field.step();
        render::draw_field(&self.ctx, &field);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stops a running animation loop. Dropping the handle leaves the loop running.
#[derive(Clone)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // break the closure's reference to itself so it can be freed
        self.tick.borrow_mut().take();
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    fn schedule(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            self.pending
                .set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        stopped: Rc::new(Cell::new(false)),
        pending: Rc::new(Cell::new(None)),
        tick: Rc::new(RefCell::new(None)),
    };
    let handle_tick = handle.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.pending.set(None);
        if handle_tick.is_stopped() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        handle_tick.schedule();
    }) as Box<dyn FnMut()>));
    handle.schedule();
    handle
}
