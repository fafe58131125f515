pub mod client;
pub mod modal;
