//! Modal dialog behavior: open state, focus restore, scroll lock and
//! escape-to-close, independent of any particular view.

pub mod config;
pub mod controller;
pub mod error;
pub mod headless;
pub mod platform;
pub mod stack;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub(crate) mod test;

pub use config::{ModalConfig, Stacking};
pub use controller::{KeyListener, ModalController};
pub use error::PlatformError;
pub use headless::HeadlessPlatform;
pub use platform::{DispatchId, KeyHandler, KeyPress, Platform, Subscription, ESCAPE_KEY};
pub use stack::{ModalId, ModalStack};

#[cfg(target_arch = "wasm32")]
pub use web::WebPlatform;

/// Platform used by the Dioxus hooks on the current target.
#[cfg(target_arch = "wasm32")]
pub type DefaultPlatform = WebPlatform;

/// Platform used by the Dioxus hooks on the current target.
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultPlatform = HeadlessPlatform;
