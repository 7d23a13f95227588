//! Shared helpers that sit between browser APIs and the view layer.

pub mod scroll;
