//! The single portfolio page.
//!
//! Owns the window listener lifecycle: scroll and mousemove handlers are
//! attached on mount and removed on teardown regardless of exit path. The
//! handlers are unthrottled; every event is applied as it arrives.

use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::hero::HeroSection;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;
#[cfg(feature = "csr")]
use crate::state::view::ViewState;
#[cfg(feature = "csr")]
use crate::util::scroll;

/// Composes the five content sections in document order and drives the
/// shared [`crate::state::view::ViewState`] from window events.
#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let view = expect_context::<RwSignal<ViewState>>();

        let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = scroll::scroll_offset();
            let detected = scroll::detect_active_section();
            view.update(|v| v.note_scroll(offset, detected));
        });
        let pointer_listener = window_event_listener(leptos::ev::mousemove, move |ev| {
            view.update(|v| v.note_pointer(f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
        on_cleanup(move || {
            scroll_listener.remove();
            pointer_listener.remove();
        });
    }

    view! {
        <main class="home-page">
            <HeroSection/>
            <AboutSection/>
            <ProjectsSection/>
            <SkillsSection/>
            <ContactSection/>
        </main>
    }
}
