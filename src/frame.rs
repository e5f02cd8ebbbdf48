use folio_core::{Flow, FrameTask, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type RafClosure = Closure<dyn FnMut(f64)>;

fn request_frame(cb: &RafClosure) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `task` from `requestAnimationFrame` until it returns [`Flow::Stop`]
/// or `handle` is stopped. Each tick receives the RAF timestamp (ms).
pub fn start_loop<T: FrameTask + 'static>(task: Rc<RefCell<T>>, handle: LoopHandle) {
    let tick: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if handle.is_stopped() || task.borrow_mut().tick(ts) == Flow::Stop {
            // drop the closure (and the task it owns) once the loop ends
            tick_clone.borrow_mut().take();
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
