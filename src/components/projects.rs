//! Featured projects grid.

use leptos::prelude::*;

use crate::components::icons::{ExternalLinkIcon, ProjectGlyph};
use crate::content::{PROJECTS, Project};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .map(|project| view! { <ProjectCard project=project/> })
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class="projects">
            <div class="projects__inner">
                <h2 class="section-heading">"Featured Projects"</h2>
                <div class="projects__grid">{cards}</div>
            </div>
        </section>
    }
}

/// One project card: icon, repository link, title, description, tech tags.
#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let suffix = project.gradient.class_suffix();
    let tags = project
        .tech
        .iter()
        .map(|&tag| view! { <span class="tag">{tag}</span> })
        .collect::<Vec<_>>();

    view! {
        <article class="project-card">
            <div class="project-card__header">
                <div class=format!("project-card__icon project-card__icon--{suffix}")>
                    <ProjectGlyph icon=project.icon/>
                </div>
                <a
                    href=project.github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="project-card__repo"
                    aria-label="View repository"
                >
                    <ExternalLinkIcon/>
                </a>
            </div>
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__description">{project.description}</p>
            <div class="project-card__tags">{tags}</div>
        </article>
    }
}
