//! Open/closed lifecycle of a single modal dialog.
//!
//! A `ModalController` owns the open flag and the element to give focus back to.
//! Opening captures the focused element and locks page scrolling; closing
//! unlocks scrolling and restores focus. `attach` subscribes the controller to
//! the global keydown channel so escape closes it, for as long as the returned
//! `KeyListener` lives.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use dioxus_logger::tracing;

use crate::modal::{
    config::ModalConfig,
    error::PlatformError,
    platform::{KeyPress, Platform, Subscription, ESCAPE_KEY},
    stack::{ModalId, ModalStack},
};

/// Mutable state of one modal.
struct ModalState<E> {
    is_open: bool,
    /// Element that held focus when the modal was last opened.
    ///
    /// Kept after close so a repeated close focuses the same element again.
    prior_focus: Option<E>,
}

struct Inner<P: Platform> {
    platform: P,
    config: ModalConfig,
    membership: Option<(ModalStack, ModalId)>,
    state: RefCell<ModalState<P::Element>>,
    observer: RefCell<Option<Box<dyn Fn(bool)>>>,
}

/// Controller for one modal dialog.
///
/// Cloning yields another handle to the same controller.
pub struct ModalController<P: Platform> {
    inner: Rc<Inner<P>>,
}

impl<P: Platform> Clone for ModalController<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: Platform + 'static> ModalController<P> {
    /// Creates a closed controller that acts independently of other modals.
    pub fn new(platform: P, config: ModalConfig) -> Self {
        Self::build(platform, config, None)
    }

    /// Creates a closed controller that is a member of `stack`.
    pub fn stacked(platform: P, config: ModalConfig, stack: ModalStack) -> Self {
        let id = stack.register();
        Self::build(platform, config, Some((stack, id)))
    }

    fn build(platform: P, config: ModalConfig, membership: Option<(ModalStack, ModalId)>) -> Self {
        Self {
            inner: Rc::new(Inner {
                platform,
                config,
                membership,
                state: RefCell::new(ModalState {
                    is_open: false,
                    prior_focus: None,
                }),
                observer: RefCell::new(None),
            }),
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.state.borrow().is_open
    }

    pub fn config(&self) -> &ModalConfig {
        &self.inner.config
    }

    /// Registers a callback run whenever the open flag changes value.
    ///
    /// Replaces any previously registered callback.
    pub fn on_change(&self, observer: impl Fn(bool) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Box::new(observer));
    }

    /// Opens the modal.
    ///
    /// Opening an already open modal keeps it open but re-captures the focused
    /// element, which may by then be an element inside the modal.
    pub fn open(&self) {
        let inner = &self.inner;
        let focused = if inner.config.restore_focus {
            inner.platform.active_element()
        } else {
            None
        };

        let changed = {
            let mut state = inner.state.borrow_mut();
            state.prior_focus = focused;
            let changed = !state.is_open;
            state.is_open = true;
            changed
        };

        if let Some((stack, id)) = &inner.membership {
            stack.push(*id, inner.config.lock_scroll);
        }

        if inner.config.lock_scroll {
            if let Err(err) = inner.platform.set_scroll_locked(true) {
                tracing::warn!("Failed to lock page scroll: {}", err);
            }
        }

        tracing::debug!("Modal opened");

        if changed {
            self.notify(true);
        }
    }

    /// Closes the modal.
    ///
    /// Safe to call while already closed: an independent modal resets scrolling
    /// and restores focus again, which leaves the page unchanged.
    pub fn close(&self) {
        let inner = &self.inner;

        let (changed, target) = {
            let mut state = inner.state.borrow_mut();
            let changed = state.is_open;
            state.is_open = false;
            (changed, state.prior_focus.clone())
        };

        // Stacked modals unlock once no open member holds the lock, even when the
        // closing member never locked the page itself
        let release_scroll = match &inner.membership {
            Some((stack, id)) => {
                let was_locked = stack.is_locked();
                stack.remove(*id);
                was_locked && !stack.is_locked()
            }
            None => inner.config.lock_scroll,
        };

        if release_scroll {
            if let Err(err) = inner.platform.set_scroll_locked(false) {
                tracing::warn!("Failed to unlock page scroll: {}", err);
            }
        }

        if inner.config.restore_focus {
            if let Some(target) = target {
                if let Err(err) = inner.platform.focus(&target) {
                    tracing::warn!("Failed to restore focus: {}", err);
                }
            }
        }

        tracing::debug!("Modal closed");

        if changed {
            self.notify(false);
        }
    }

    /// Subscribes the controller to escape keypresses.
    ///
    /// The subscription lasts until the returned `KeyListener` is dropped. The
    /// listener only holds a weak reference, so it never keeps the controller alive
    /// and does nothing once the controller is gone.
    pub fn attach(&self) -> Result<KeyListener, PlatformError> {
        if !self.inner.config.close_on_escape {
            return Ok(KeyListener {
                subscription: Subscription::inert(),
            });
        }

        let controller: Weak<Inner<P>> = Rc::downgrade(&self.inner);
        let subscription = self
            .inner
            .platform
            .subscribe_keydown(Box::new(move |press: &KeyPress<'_>| {
                if let Some(inner) = controller.upgrade() {
                    ModalController { inner }.on_keydown(press);
                }
            }))?;

        tracing::debug!("Attached modal escape listener");

        Ok(KeyListener { subscription })
    }

    fn on_keydown(&self, press: &KeyPress<'_>) {
        if press.key != ESCAPE_KEY || !self.is_open() {
            return;
        }

        // Stacked members close one per keypress; independent ones always close
        let closes = match &self.inner.membership {
            Some((stack, id)) => stack.claim_escape(*id, press.dispatch),
            None => true,
        };

        if closes {
            self.close();
        }
    }

    fn notify(&self, is_open: bool) {
        if let Some(observer) = self.inner.observer.borrow().as_ref() {
            observer(is_open);
        }
    }
}

impl<P: Platform> Drop for Inner<P> {
    fn drop(&mut self) {
        let Some((stack, id)) = &self.membership else {
            return;
        };

        // A member dropped while open must not keep the page locked
        let was_locked = stack.is_locked();
        if stack.remove(*id) && was_locked && !stack.is_locked() {
            if let Err(err) = self.platform.set_scroll_locked(false) {
                tracing::warn!("Failed to unlock page scroll: {}", err);
            }
        }
    }
}

/// Escape-key registration of a controller.
///
/// Dropping it deregisters the listener.
#[must_use = "dropping a key listener detaches it immediately"]
#[derive(Debug)]
pub struct KeyListener {
    subscription: Subscription,
}

impl KeyListener {
    /// Whether this listener holds no registration, e.g. because escape is disabled.
    pub fn is_inert(&self) -> bool {
        self.subscription.is_inert()
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if !self.subscription.is_inert() {
            tracing::debug!("Detached modal escape listener");
        }
    }
}
