use crate::core::AnimationDriver;
use crate::env::WebEnvironment;
use crate::surface::WebCanvas;
use rand::rngs::StdRng;
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;

pub type CursorDriver = AnimationDriver<WebEnvironment, WebCanvas, StdRng>;
pub type SharedDriver = Rc<RefCell<CursorDriver>>;

/// Late-bound handle to the driver for the frame callback, which has to
/// exist before the driver can request its first frame.
pub type DriverSlot = Rc<OnceCell<SharedDriver>>;

/// Install the requestAnimationFrame callback on `env`.
///
/// The callback only steps the driver; rescheduling happens inside
/// `AnimationDriver::frame`, which keeps one request outstanding at a time.
pub fn install_tick(env: &WebEnvironment, slot: DriverSlot) {
    let tick = Closure::wrap(Box::new(move || {
        if let Some(driver) = slot.get() {
            driver.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>);
    *env.tick.borrow_mut() = Some(tick);
}
