//! Contact section with outbound links and the page footer.

use leptos::prelude::*;

use crate::components::icons::{GithubIcon, MailIcon};
use crate::content::{CONTACT_EMAIL_URL, GITHUB_PROFILE_URL};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="contact__inner">
                <h2 class="section-heading">"Let's Connect"</h2>
                <p class="contact__blurb">
                    "I'm always open to discussing new projects, creative ideas, or \
                     opportunities to be part of your vision."
                </p>
                <div class="contact__actions">
                    <a href=CONTACT_EMAIL_URL class="btn btn--primary">
                        <MailIcon/>
                        <span>"Send Email"</span>
                    </a>
                    <a
                        href=GITHUB_PROFILE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn--outline"
                    >
                        <GithubIcon/>
                        <span>"View GitHub"</span>
                    </a>
                </div>
                <footer class="contact__footer">
                    <p>"© 2026 Fares Fehri. Built with Rust, Leptos & WebAssembly"</p>
                </footer>
            </div>
        </section>
    }
}
