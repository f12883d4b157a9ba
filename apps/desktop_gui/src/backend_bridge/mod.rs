//! UI-to-worker command queue and the worker runtime.

pub mod commands;
pub mod runtime;
