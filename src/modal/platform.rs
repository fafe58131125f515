//! Port between the modal controller and the page it runs in.
//!
//! The controller never touches the DOM directly. Everything ambient it depends on
//! (the focused element, the body scroll style, the global keydown channel) goes
//! through the `Platform` trait so the same logic runs in the browser, during
//! server rendering, and against a test double.

use crate::modal::error::PlatformError;

/// Key identifier delivered for the escape key.
pub const ESCAPE_KEY: &str = "Escape";

/// Identity of one keydown dispatch.
///
/// Every listener invoked for the same physical keypress sees the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DispatchId(pub u64);

/// Keydown event as seen by a `KeyHandler`.
#[derive(Debug, Clone, Copy)]
pub struct KeyPress<'a> {
    /// Key identifier (`"Escape"`, `"Enter"`, `"a"`).
    pub key: &'a str,
    pub dispatch: DispatchId,
}

/// Callback registered on the global keydown channel.
pub type KeyHandler = Box<dyn FnMut(&KeyPress<'_>)>;

/// Ambient UI services a modal controller depends on.
pub trait Platform {
    /// Handle to a focusable element.
    ///
    /// Held only to focus it again later; the controller never mutates it.
    type Element: Clone + 'static;

    /// Returns the element currently holding input focus, if any.
    fn active_element(&self) -> Option<Self::Element>;

    /// Moves input focus to `element`.
    ///
    /// An element that has since been removed from the page is skipped silently.
    fn focus(&self, element: &Self::Element) -> Result<(), PlatformError>;

    /// Disables (`true`) or restores (`false`) page scrolling.
    ///
    /// Restoring always resets the style to its default rather than to whatever
    /// value it held before locking.
    fn set_scroll_locked(&self, locked: bool) -> Result<(), PlatformError>;

    /// Registers `handler` on the global keydown channel.
    ///
    /// The handler stays registered until the returned `Subscription` is dropped.
    fn subscribe_keydown(&self, handler: KeyHandler) -> Result<Subscription, PlatformError>;
}

/// Registration on the global keydown channel.
///
/// Dropping the subscription deregisters the handler, exactly once.
#[must_use = "dropping a subscription deregisters its handler"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps the deregistration routine of a platform adapter.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription with nothing to release.
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn is_inert(&self) -> bool {
        self.release.is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("inert", &self.is_inert())
            .finish()
    }
}
