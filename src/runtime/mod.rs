pub mod lifetime;

pub use lifetime::startup::{AppContext, prepare_startup};
