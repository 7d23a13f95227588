//! Hero banner — the "home" section.

use leptos::prelude::*;

use crate::components::icons::ChevronDownIcon;
use crate::state::view::Section;
use crate::util::scroll;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__inner">
                <div class="hero__tag">"<Developer />"</div>
                <h1 class="hero__title">"Fares Fehri"</h1>
                <p class="hero__subtitle">
                    "Software Developer & AI Enthusiast"
                    <br/>
                    "Building intelligent systems and interactive experiences"
                </p>
                <div class="hero__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| scroll::scroll_to_section(Section::Projects)
                    >
                        "View My Work"
                    </button>
                    <button
                        class="btn btn--outline"
                        on:click=move |_| scroll::scroll_to_section(Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
            <div class="hero__scroll-hint">
                <ChevronDownIcon/>
            </div>
        </section>
    }
}
