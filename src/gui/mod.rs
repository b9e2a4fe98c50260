// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod fonts;

pub use app::{native_options, run};
