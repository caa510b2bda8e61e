use crate::constants::{FINE_POINTER_QUERY, REDUCED_MOTION_QUERY};
use crate::core::{Environment, FrameHandle, Viewport};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Browser-backed [`Environment`].
///
/// `tick` holds the animation-frame closure installed by `frame::install_tick`;
/// frame requests are refused until it is set.
#[derive(Default)]
pub struct WebEnvironment {
    pub tick: FrameCallback,
}

impl WebEnvironment {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Environment for WebEnvironment {
    fn supports_fine_pointer(&self) -> bool {
        dom::media_matches(FINE_POINTER_QUERY).unwrap_or(true)
    }

    fn prefers_reduced_motion(&self) -> bool {
        dom::media_matches(REDUCED_MOTION_QUERY).unwrap_or(false)
    }

    fn viewport(&self) -> Viewport {
        dom::read_viewport()
    }

    fn theme_color(&self, slot: &str) -> Option<String> {
        dom::root_css_var(slot)
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        let w = web::window()?;
        let tick = self.tick.borrow();
        let cb = tick.as_ref()?;
        w.request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}
