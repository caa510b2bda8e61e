//! Pointer-following particle cursor drawn on a 2D canvas.
//!
//! `core` holds the host-independent simulation and lifecycle and builds on
//! any target; the browser bindings below it are wasm32-only.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod env;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys as web;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-cursor starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // independent of the cursor; stays active when the effect is disabled
    events::gallery::wire_placeholder_guard(&document);

    let doc = document.clone();
    dom::when_ready(&document, move || {
        if let Err(e) = start_cursor(&window, &doc) {
            log::error!("cursor init error: {:?}", e);
        }
    });
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn start_cursor(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    use crate::core::{CursorConfig, DriverState};
    use crate::frame::{CursorDriver, DriverSlot};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::{OnceCell, RefCell};
    use std::rc::Rc;

    let env = env::WebEnvironment::new();
    let slot: DriverSlot = Rc::new(OnceCell::new());
    frame::install_tick(&env, slot.clone());

    let driver = CursorDriver::start(
        env,
        CursorConfig::default(),
        StdRng::from_entropy(),
        || surface::WebCanvas::acquire(document),
    );
    if let DriverState::Disabled(_) = driver.state() {
        return Ok(());
    }

    let driver = Rc::new(RefCell::new(driver));
    _ = slot.set(driver.clone());

    events::pointer::wire_pointer_handlers(window, &driver);
    events::lifecycle::wire_resize(window, &driver);
    events::lifecycle::wire_visibility(document, &driver);
    events::lifecycle::wire_reduced_motion(&driver);
    events::lifecycle::wire_theme_watch(document, &driver)?;
    Ok(())
}
