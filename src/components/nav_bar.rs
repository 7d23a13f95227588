//! Fixed top navigation with scroll-aware styling and section highlighting.

use leptos::prelude::*;

use crate::components::icons::{CodeIcon, GithubIcon, LinkedinIcon};
use crate::content::{GITHUB_PROFILE_URL, LINKEDIN_URL};
use crate::state::view::{Section, ViewState};
use crate::util::scroll;

/// Fixed navigation bar.
///
/// Gains a translucent backdrop once the page is scrolled past the
/// threshold and highlights the button of the active section. Each button
/// smooth-scrolls its section into view.
#[component]
pub fn NavBar() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    let nav_buttons = Section::ALL
        .iter()
        .map(|&section| {
            view! {
                <button
                    class="nav-bar__link"
                    class=("nav-bar__link--active", move || view.get().active_section == section)
                    on:click=move |_| scroll::scroll_to_section(section)
                >
                    {section.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav-bar" class=("nav-bar--scrolled", move || view.get().is_scrolled)>
            <div class="nav-bar__inner">
                <div class="nav-bar__brand">
                    <CodeIcon/>
                    <span class="nav-bar__name">"Fares Fehri"</span>
                </div>
                <div class="nav-bar__links">{nav_buttons}</div>
                <div class="nav-bar__social">
                    <a href=GITHUB_PROFILE_URL target="_blank" rel="noopener noreferrer" aria-label="GitHub profile">
                        <GithubIcon/>
                    </a>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" aria-label="LinkedIn profile">
                        <LinkedinIcon/>
                    </a>
                </div>
            </div>
        </nav>
    }
}
