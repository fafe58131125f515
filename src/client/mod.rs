pub mod app;
pub mod component;
pub mod model;

pub use app::App;
