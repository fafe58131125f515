//! Shared ordering of the modals currently open on a page.
//!
//! Independent controllers each reset the scroll style on close and all react to
//! the same escape keypress. Controllers that join a `ModalStack` instead share
//! one ordered record of who is open: the page stays locked while any open member
//! asked for a scroll lock, and each escape keypress closes only the top-most entry.

use std::{cell::RefCell, rc::Rc};

use crate::modal::platform::DispatchId;

/// Identity of a controller within a `ModalStack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(u64);

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: ModalId,
    locks_scroll: bool,
}

#[derive(Default)]
struct StackState {
    next_id: u64,
    /// Open modals, bottom first.
    open: Vec<Entry>,
    /// Last keydown dispatch that already closed a member.
    escape_handled: Option<DispatchId>,
}

/// Page-wide stack of open modals.
///
/// Cloning yields another handle to the same stack.
#[derive(Clone, Default)]
pub struct ModalStack {
    inner: Rc<RefCell<StackState>>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out an id for a new member controller.
    pub(crate) fn register(&self) -> ModalId {
        let mut state = self.inner.borrow_mut();
        let id = ModalId(state.next_id);
        state.next_id += 1;
        id
    }

    /// Places `id` on top, moving it there if it was already open lower down.
    pub(crate) fn push(&self, id: ModalId, locks_scroll: bool) {
        let mut state = self.inner.borrow_mut();
        state.open.retain(|entry| entry.id != id);
        state.open.push(Entry { id, locks_scroll });
    }

    /// Removes `id`, returning whether it was open.
    pub(crate) fn remove(&self, id: ModalId) -> bool {
        let mut state = self.inner.borrow_mut();
        let before = state.open.len();
        state.open.retain(|entry| entry.id != id);
        state.open.len() != before
    }

    /// Claims `dispatch` for closing `id`.
    ///
    /// Succeeds only for the top-most member and only once per dispatch, so the
    /// member that becomes top during the same keypress is left open.
    pub(crate) fn claim_escape(&self, id: ModalId, dispatch: DispatchId) -> bool {
        let mut state = self.inner.borrow_mut();
        if state.escape_handled == Some(dispatch) {
            return false;
        }
        if state.open.last().map(|entry| entry.id) != Some(id) {
            return false;
        }
        state.escape_handled = Some(dispatch);
        true
    }

    /// Whether any open member holds the page scroll lock.
    pub fn is_locked(&self) -> bool {
        self.inner.borrow().open.iter().any(|entry| entry.locks_scroll)
    }

    /// Number of modals currently open.
    pub fn len(&self) -> usize {
        self.inner.borrow().open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().open.is_empty()
    }
}

impl PartialEq for ModalStack {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for ModalStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("ModalStack")
            .field("open", &state.open)
            .field("escape_handled", &state.escape_handled)
            .finish()
    }
}
