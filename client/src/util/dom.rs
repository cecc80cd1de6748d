//! Browser implementations of the `sitefx` host capabilities, plus small
//! lookup and listener helpers shared by the setup steps.

use gloo_timers::callback::Timeout;
use sitefx::error::SetupError;
use sitefx::host::{PreferenceStore, Scheduler, TextSurface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Storage, Window};

pub fn host_error(err: JsValue) -> SetupError {
    SetupError::Host(format!("{err:?}"))
}

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or_else(|| SetupError::Host("no global window".to_owned()))
}

pub fn document() -> Result<Document, SetupError> {
    window()?
        .document()
        .ok_or_else(|| SetupError::Host("window has no document".to_owned()))
}

pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, SetupError> {
    document.query_selector(selector).map_err(host_error)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SetupError> {
    let nodes = document.query_selector_all(selector).map_err(host_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SetupError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(host_error)?;
    closure.forget();
    Ok(())
}

/// Toggle a class, logging instead of failing inside event handlers.
pub fn set_class(element: &Element, class: &str, enabled: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, enabled) {
        log::warn!("failed to toggle class {class}: {e:?}");
    }
}

// =============================================================================
// HOST CAPABILITIES
// =============================================================================

/// `setTimeout`-backed scheduler. Timers are never cancelled.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// The visible text of one element.
pub struct ElementText {
    element: Element,
}

impl ElementText {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl TextSurface for ElementText {
    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// `localStorage`, when the browser allows it. Without storage the
/// preference lives only for the current page.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("failed to persist {key}: {e:?}");
            }
        }
    }
}
