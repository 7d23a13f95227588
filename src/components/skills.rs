//! Skills and technologies grid.

use leptos::prelude::*;

use crate::content::SKILL_CATEGORIES;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let groups = SKILL_CATEGORIES
        .iter()
        .map(|category| {
            let items = category
                .skills
                .iter()
                .map(|&skill| {
                    view! {
                        <li class="skill-group__item">
                            <span class="skill-group__dot"></span>
                            {skill}
                        </li>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="skill-group">
                    <h3 class="skill-group__name">{category.name}</h3>
                    <ul class="skill-group__list">{items}</ul>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="skills" class="skills">
            <div class="skills__inner">
                <h2 class="section-heading">"Skills & Technologies"</h2>
                <div class="skills__grid">{groups}</div>
            </div>
        </section>
    }
}
