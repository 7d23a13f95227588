//! Client-side view state.
//!
//! DESIGN
//! ======
//! The page has a single instance per session, so all interactive state
//! lives in one [`view::ViewState`] owned by the root component and shared
//! through context. Update rules are plain methods so they test natively.

pub mod view;
