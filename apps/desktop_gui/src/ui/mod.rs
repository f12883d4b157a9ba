//! Presentation layer: form, record grid, banner, and status bar.

pub mod app;
