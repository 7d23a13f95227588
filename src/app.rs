//! Root application component and shared state provisioning.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::background::BackgroundLayer;
use crate::components::nav_bar::NavBar;
use crate::pages::home::HomePage;
use crate::state::view::ViewState;

/// Root application component.
///
/// Provides the shared [`ViewState`] context and composes the fixed chrome
/// (background decoration, navigation bar) around the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let view = RwSignal::new(ViewState::default());
    provide_context(view);

    view! {
        <Title text="Fares Fehri | Portfolio"/>
        <BackgroundLayer/>
        <NavBar/>
        <HomePage/>
    }
}
