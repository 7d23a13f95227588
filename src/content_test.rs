use super::*;

// =============================================================
// Projects
// =============================================================

#[test]
fn four_projects_in_fixed_order() {
    let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
    assert_eq!(
        titles,
        ["AI Chatbot with LLM", "GameAndBrain", "Dream Ball", "Benchmarking"]
    );
}

#[test]
fn every_project_is_fully_populated() {
    for project in &PROJECTS {
        assert!(!project.description.is_empty(), "{}", project.title);
        assert!(!project.tech.is_empty(), "{}", project.title);
        assert!(
            project.github.starts_with("https://github.com/"),
            "{}",
            project.title
        );
    }
}

#[test]
fn project_gradients_are_distinct_css_suffixes() {
    let suffixes: Vec<&str> = PROJECTS.iter().map(|p| p.gradient.class_suffix()).collect();
    for (i, a) in suffixes.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &suffixes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn chatbot_project_tags_in_order() {
    assert_eq!(PROJECTS[0].tech, ["Python", "LLM", "NLP", "AI"]);
}

// =============================================================
// Skills
// =============================================================

#[test]
fn four_skill_categories_in_insertion_order() {
    let names: Vec<&str> = SKILL_CATEGORIES.iter().map(|c| c.name).collect();
    assert_eq!(names, ["Programming", "AI/ML", "Development", "Tools"]);
}

#[test]
fn skill_lists_match_fixed_content() {
    assert_eq!(
        SKILL_CATEGORIES[0].skills,
        ["Python", "JavaScript", "Java", "C++"]
    );
    assert_eq!(
        SKILL_CATEGORIES[1].skills,
        ["Large Language Models", "NLP", "Deep Learning", "TensorFlow"]
    );
    assert_eq!(
        SKILL_CATEGORIES[2].skills,
        ["React", "Node.js", "Git", "REST APIs"]
    );
    assert_eq!(
        SKILL_CATEGORIES[3].skills,
        ["Docker", "Linux", "VSCode", "Jupyter"]
    );
}

// =============================================================
// Outbound links
// =============================================================

#[test]
fn outbound_links_are_absolute() {
    assert!(GITHUB_PROFILE_URL.starts_with("https://"));
    assert!(LINKEDIN_URL.starts_with("https://"));
    assert!(CONTACT_EMAIL_URL.starts_with("mailto:"));
}
