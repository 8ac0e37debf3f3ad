use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs a callback on the next animation frame, at most once per frame.
///
/// Any number of [`FrameRequester::request`] calls before the frame fires
/// collapse into one callback. The callback returns `true` to keep running on
/// the following frame. Dropping the scheduler cancels a pending frame.
pub struct FrameScheduler {
    slot: FrameSlot,
    pending: Rc<Cell<Option<i32>>>,
}

/// Cheap handle for requesting frames from event listeners.
#[derive(Clone)]
pub struct FrameRequester {
    slot: FrameSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameScheduler {
    pub fn new(mut on_frame: impl FnMut() -> bool + 'static) -> Self {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let slot_tick = slot.clone();
        let pending_tick = pending.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if on_frame() {
                request(&slot_tick, &pending_tick);
            }
        }) as Box<dyn FnMut()>));
        Self { slot, pending }
    }

    pub fn requester(&self) -> FrameRequester {
        FrameRequester {
            slot: self.slot.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl FrameRequester {
    pub fn request(&self) {
        request(&self.slot, &self.pending);
    }
}

fn request(slot: &FrameSlot, pending: &Rc<Cell<Option<i32>>>) {
    if pending.get().is_some() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = slot.borrow().as_ref() {
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.pending.take(), web::window()) {
            _ = window.cancel_animation_frame(id);
        }
        // The closure holds a handle to its own slot; release it to break the cycle.
        self.slot.borrow_mut().take();
    }
}
