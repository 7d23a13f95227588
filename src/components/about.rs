//! About section: bio paragraphs, focus-area chips, and a decorative panel.

use leptos::prelude::*;

use crate::components::icons::CodeIcon;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="about__inner">
                <h2 class="section-heading">"About Me"</h2>
                <div class="about__columns">
                    <div class="about__text">
                        <p>
                            "I'm a passionate software developer with a strong focus on artificial \
                             intelligence and machine learning. My journey in tech has led me to \
                             explore the fascinating intersection of AI, gaming, and cognitive science."
                        </p>
                        <p>
                            "With expertise in building intelligent systems using Large Language Models \
                             and creating interactive experiences, I bring ideas to life through code. \
                             I'm constantly learning and experimenting with cutting-edge technologies."
                        </p>
                        <div class="about__chips">
                            <span class="chip chip--cyan">"AI Development"</span>
                            <span class="chip chip--blue">"Full Stack"</span>
                            <span class="chip chip--purple">"Game Dev"</span>
                        </div>
                    </div>
                    <div class="about__panel">
                        <CodeIcon/>
                    </div>
                </div>
            </div>
        </section>
    }
}
