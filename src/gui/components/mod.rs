// src/gui/components/mod.rs
pub mod chart_buttons;
pub mod gallery;
