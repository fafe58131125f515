use serde::Deserialize;

/// How a controller coordinates with other modals on the same page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stacking {
    /// Every controller toggles the scroll lock and reacts to escape on its own.
    ///
    /// Closing any modal resets the scroll style, and every open modal closes on
    /// the same escape keypress.
    #[default]
    Independent,
    /// Controllers join a shared `ModalStack`: the page stays locked while any of
    /// them is open and escape closes only the top-most one.
    Shared,
}

/// Behavior switches for a single modal controller.
///
/// The defaults give the plain open/close behavior: escape closes the modal,
/// focus returns to the trigger, and the page cannot scroll while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub close_on_escape: bool,
    pub restore_focus: bool,
    pub lock_scroll: bool,
    pub stacking: Stacking,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            close_on_escape: true,
            restore_focus: true,
            lock_scroll: true,
            stacking: Stacking::Independent,
        }
    }
}

impl ModalConfig {
    /// Config for a modal that must be dismissed explicitly.
    pub fn without_escape() -> Self {
        Self {
            close_on_escape: false,
            ..Self::default()
        }
    }

    /// Config for a modal that joins the page's shared modal stack.
    pub fn shared() -> Self {
        Self {
            stacking: Stacking::Shared,
            ..Self::default()
        }
    }
}
