//! Browser bridge for the heart access page.
//!
//! A single `PageRunner` lives in a `thread_local!`; every export below
//! forwards to it. The host calls `page_init` once, then `page_tick` from
//! `requestAnimationFrame` and reads terminal updates, events, sounds and the
//! particle triangle buffer after each tick.

use std::cell::RefCell;

use heartgate::{ConfigError, InputEvent, PageConfig, SessionConfig};
use wasm_bindgen::prelude::*;

pub mod runner;

pub use runner::PageRunner;

thread_local! {
    static RUNNER: RefCell<Option<PageRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut PageRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Page not initialized. Call page_init() first.");
        f(runner)
    })
}

/// Parse and validate the host's config. An empty string selects the
/// built-in questions.
pub fn load_config(json: &str) -> Result<SessionConfig, ConfigError> {
    if json.trim().is_empty() {
        return Ok(SessionConfig::default());
    }
    SessionConfig::load(json)
}

#[wasm_bindgen]
pub fn page_init(config_json: &str, width: f32, height: f32) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let session = load_config(config_json).map_err(|e| {
        log::error!("Invalid page config: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    let seed = session.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let config = PageConfig {
        viewport_width: width,
        viewport_height: height,
        ..PageConfig::default()
    };

    let runner = PageRunner::new(session, config, seed).map_err(|e| {
        log::error!("Failed to start page: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("heartgate: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn page_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Enter pressed in the answer field.
#[wasm_bindgen]
pub fn page_submit(text: &str) {
    with_runner(|r| r.push_input(InputEvent::Submit { text: text.to_string() }));
}

#[wasm_bindgen]
pub fn page_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

/// The host could not start its audio context.
#[wasm_bindgen]
pub fn page_disable_sound() {
    with_runner(|r| r.disable_sound());
}

// ---- Data accessors ----

/// JSON array of `{ index, style, text }` for lines changed since the last call.
#[wasm_bindgen]
pub fn page_terminal_updates() -> String {
    with_runner(|r| r.terminal_updates_json())
}

#[wasm_bindgen]
pub fn page_header() -> Vec<f32> {
    with_runner(|r| r.header().to_vec())
}

#[wasm_bindgen]
pub fn page_input_open() -> bool {
    with_runner(|r| r.input_open())
}

#[wasm_bindgen]
pub fn page_flags() -> u32 {
    with_runner(|r| r.flags())
}

#[wasm_bindgen]
pub fn get_terminal_opacity() -> f32 {
    with_runner(|r| r.terminal_opacity())
}

#[wasm_bindgen]
pub fn get_glitch_offset() -> f32 {
    with_runner(|r| r.glitch_offset())
}

#[wasm_bindgen]
pub fn get_vector_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vector_vertices_ptr())
}

#[wasm_bindgen]
pub fn get_vector_vertex_count() -> u32 {
    with_runner(|r| r.vector_vertex_count())
}

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const u8 {
    with_runner(|r| r.sound_events_ptr())
}

#[wasm_bindgen]
pub fn get_sound_events_len() -> u32 {
    with_runner(|r| r.sound_events_len())
}

#[wasm_bindgen]
pub fn get_page_events_ptr() -> *const f32 {
    with_runner(|r| r.page_events_ptr())
}

#[wasm_bindgen]
pub fn get_page_events_len() -> u32 {
    with_runner(|r| r.page_events_len())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_vector_vertices() -> u32 {
    with_runner(|r| r.max_vector_vertices())
}

#[wasm_bindgen]
pub fn get_max_sounds() -> u32 {
    with_runner(|r| r.max_sounds())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}
