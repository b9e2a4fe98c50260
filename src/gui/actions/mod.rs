// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::plot.

mod plot;  // src/gui/actions/plot.rs

pub use plot::plot;
