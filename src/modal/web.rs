//! Browser platform backed by `web-sys`.

use dioxus_logger::tracing;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlElement, KeyboardEvent, Window};

use crate::modal::{
    error::PlatformError,
    platform::{DispatchId, KeyHandler, KeyPress, Platform, Subscription},
};

const KEYDOWN: &str = "keydown";

fn js_error(value: JsValue) -> PlatformError {
    PlatformError::Js(format!("{value:?}"))
}

/// Platform operating on the page's `window` and `document`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebPlatform;

impl WebPlatform {
    fn window() -> Result<Window, PlatformError> {
        web_sys::window().ok_or(PlatformError::NoWindow)
    }

    fn body() -> Result<HtmlElement, PlatformError> {
        Self::window()?
            .document()
            .ok_or(PlatformError::NoDocument)?
            .body()
            .ok_or(PlatformError::NoBody)
    }
}

impl Platform for WebPlatform {
    type Element = HtmlElement;

    fn active_element(&self) -> Option<Self::Element> {
        let document = web_sys::window()?.document()?;
        let active = document.active_element()?.dyn_into::<HtmlElement>().ok()?;

        // Browsers report <body> as active when nothing has focus
        match document.body() {
            Some(body) if body == active => None,
            _ => Some(active),
        }
    }

    fn focus(&self, element: &Self::Element) -> Result<(), PlatformError> {
        if !element.is_connected() {
            tracing::debug!("Skipping focus restore, element is no longer on the page");
            return Ok(());
        }

        element.focus().map_err(js_error)
    }

    fn set_scroll_locked(&self, locked: bool) -> Result<(), PlatformError> {
        let style = Self::body()?.style();

        if locked {
            style.set_property("overflow", "hidden").map_err(js_error)
        } else {
            style.remove_property("overflow").map(|_| ()).map_err(js_error)
        }
    }

    fn subscribe_keydown(&self, mut handler: KeyHandler) -> Result<Subscription, PlatformError> {
        let window = Self::window()?;

        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            // Listeners of one dispatch share the event timestamp
            handler(&KeyPress {
                key: &key,
                dispatch: DispatchId(event.time_stamp().to_bits()),
            });
        });

        window
            .add_event_listener_with_callback(KEYDOWN, callback.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(Subscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback(KEYDOWN, callback.as_ref().unchecked_ref())
            {
                tracing::warn!("Failed to remove keydown listener: {:?}", err);
            }
        }))
    }
}
