//! # portfolio
//!
//! Leptos + WASM single-page portfolio site. The page is static content
//! plus three small interactive behaviors: scroll-based nav highlighting,
//! a pointer-following background glow, and smooth-scroll navigation.
//!
//! Browser-only code (web-sys calls, listener wiring, logger setup) is
//! gated behind the `csr` cargo feature so the state and geometry modules
//! compile and test natively with default features.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;
