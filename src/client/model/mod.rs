pub mod modal;

pub use modal::{use_modal, use_modal_with_config, UseModal};
