use std::cell::RefCell;
use std::rc::Rc;

use flatland::{FrameHandle, Scheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// The frame callback, filled in once the runner that owns the scheduler exists.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` scheduling.
pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Shared slot the frame closure is stored into.
    pub fn callback(&self) -> FrameCallback {
        Rc::clone(&self.callback)
    }
}

impl Scheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.callback.borrow();
        let Some(cb) = slot.as_ref() else {
            log::warn!("raf: no frame callback installed");
            return None;
        };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(err) => {
                log::error!("raf: request failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("raf: cancel failed: {:?}", err);
        }
    }
}
