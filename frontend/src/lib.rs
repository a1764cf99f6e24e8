//! sdpi-theme frontend library.
//!
//! Builds the accent-colored stylesheet for a property inspector page and
//! keeps it applied to a document. The `web` module binds this to the live
//! DOM when compiled for WASM.

#![warn(clippy::all, rust_2018_idioms)]

pub mod document;
pub mod injector;
pub mod stylesheet;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use document::{DocumentError, MemoryDocument, StyleDocument, StyleNode, StyleUpdate};
pub use injector::{ThemeError, ThemeInjector};
pub use stylesheet::{build_stylesheet, ThemeColors};
