pub mod modal;

pub use modal::Modal;
