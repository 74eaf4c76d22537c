use crate::error::FrontendError;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, Window};

/// A `window` event subscription that lives exactly as long as this value.
///
/// Dropping the guard removes the listener, so holding it inside an effect's
/// destructor ties the subscription to the component's lifetime.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, FrontendError>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(event, false, handler)
    }

    /// Passive listeners promise never to call `prevent_default`, which lets
    /// the browser keep scrolling on its compositor thread.
    pub fn passive<F>(event: &'static str, handler: F) -> Result<Self, FrontendError>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(event, true, handler)
    }

    fn register<F>(event: &'static str, passive: bool, handler: F) -> Result<Self, FrontendError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window().ok_or(FrontendError::NoWindow)?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| FrontendError::listener(event, &e))?;
        log::debug!("Subscribed to window '{}' (passive: {})", event, passive);
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("{}", FrontendError::listener(self.event, &e));
        }
    }
}
