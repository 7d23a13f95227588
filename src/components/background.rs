//! Decorative fixed background layers.
//!
//! A radial gradient glow that follows the pointer, plus a faint grid
//! pattern. Both are pointer-events: none and purely cosmetic.

use leptos::prelude::*;

use crate::state::view::ViewState;

/// Pointer-following glow and grid overlay.
#[component]
pub fn BackgroundLayer() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    let glow_style = move || {
        let pointer = view.get().pointer;
        format!(
            "background: radial-gradient(circle at {}px {}px, rgba(59, 130, 246, 0.15), transparent 50%)",
            pointer.x, pointer.y
        )
    };

    view! {
        <div class="background-glow" style=glow_style></div>
        <div class="background-grid"></div>
    }
}
