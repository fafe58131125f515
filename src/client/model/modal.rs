use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::modal::{DefaultPlatform, ModalConfig, ModalController, ModalStack, Platform, Stacking};

/// Reactive handle to a modal, returned by `use_modal`.
///
/// `is_open` subscribes the calling component, so the view re-renders whenever
/// the modal opens or closes, including closes triggered by the escape key.
pub struct UseModal<P: Platform + 'static = DefaultPlatform> {
    is_open: Signal<bool>,
    controller: CopyValue<ModalController<P>>,
}

impl<P: Platform + 'static> Clone for UseModal<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Platform + 'static> Copy for UseModal<P> {}

impl<P: Platform + 'static> PartialEq for UseModal<P> {
    fn eq(&self, other: &Self) -> bool {
        self.is_open == other.is_open && self.controller == other.controller
    }
}

impl<P: Platform + 'static> UseModal<P> {
    pub fn is_open(&self) -> bool {
        (self.is_open)()
    }

    pub fn open_modal(&self) {
        let controller = self.controller.read().clone();
        controller.open();
    }

    pub fn close_modal(&self) {
        let controller = self.controller.read().clone();
        controller.close();
    }
}

/// Modal with the default behavior: escape closes, focus returns to the trigger,
/// page scrolling is locked while open.
pub fn use_modal() -> UseModal {
    use_modal_with_config(ModalConfig::default())
}

/// Modal with explicit configuration on the current target's platform.
pub fn use_modal_with_config(config: ModalConfig) -> UseModal {
    use_modal_on(DefaultPlatform::default, config)
}

/// Modal backed by the platform `make_platform` returns.
///
/// `make_platform` runs once, on the first render. The escape listener is
/// registered at the same time and released when the component is dropped. With
/// `Stacking::Shared` the modal joins the `ModalStack` provided as context by an
/// ancestor.
pub fn use_modal_on<P: Platform + 'static>(
    make_platform: impl FnOnce() -> P,
    config: ModalConfig,
) -> UseModal<P> {
    let stack = try_use_context::<ModalStack>();
    let is_open = use_signal(|| false);

    let controller = use_hook(move || {
        let platform = make_platform();
        let controller = match (config.stacking, stack) {
            (Stacking::Shared, Some(stack)) => ModalController::stacked(platform, config, stack),
            (Stacking::Shared, None) => {
                tracing::warn!("No ModalStack in context, shared modal runs independent");
                ModalController::new(platform, config)
            }
            (Stacking::Independent, _) => ModalController::new(platform, config),
        };

        controller.on_change(move |open| {
            let mut is_open = is_open;
            is_open.set(open);
        });

        CopyValue::new(controller)
    });

    let listener = use_hook(move || {
        let listener = match controller.read().attach() {
            Ok(listener) => Some(listener),
            Err(err) => {
                tracing::error!("Failed to attach modal escape listener: {}", err);
                None
            }
        };
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });

    UseModal {
        is_open,
        controller,
    }
}

#[cfg(test)]
mod test;
