//! Hand-authored page content: featured projects, skill categories, and
//! outbound links. Everything here is a literal compiled into the page;
//! there is no creation, mutation, or deletion at runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Icon glyph shown on a project card, rendered as inline SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectIcon {
    MessageSquare,
    Brain,
    Gamepad,
    BarChart,
}

/// Gradient style token for a project card, mapped to a CSS class suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gradient {
    CyanBlue,
    PurplePink,
    OrangeRed,
    GreenEmerald,
}

impl Gradient {
    /// Suffix used to build `project-card__icon--<suffix>` CSS classes.
    #[must_use]
    pub const fn class_suffix(self) -> &'static str {
        match self {
            Gradient::CyanBlue => "cyan-blue",
            Gradient::PurplePink => "purple-pink",
            Gradient::OrangeRed => "orange-red",
            Gradient::GreenEmerald => "green-emerald",
        }
    }
}

/// A featured project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub icon: ProjectIcon,
    pub github: &'static str,
    pub gradient: Gradient,
}

/// The four featured projects, in render order.
pub static PROJECTS: [Project; 4] = [
    Project {
        title: "AI Chatbot with LLM",
        description: "Advanced conversational AI system leveraging Large Language Models \
                      for intelligent, context-aware interactions.",
        tech: &["Python", "LLM", "NLP", "AI"],
        icon: ProjectIcon::MessageSquare,
        github: "https://github.com/FaresFehri10/chatbot--LLM",
        gradient: Gradient::CyanBlue,
    },
    Project {
        title: "GameAndBrain",
        description: "Innovative project exploring the intersection of gaming mechanics \
                      and cognitive science.",
        tech: &["Game Development", "Cognitive Science", "Interactive Design"],
        icon: ProjectIcon::Brain,
        github: "https://github.com/FaresFehri10/GameAndBrain",
        gradient: Gradient::PurplePink,
    },
    Project {
        title: "Dream Ball",
        description: "Creative project combining physics simulation with interactive \
                      gameplay mechanics.",
        tech: &["Physics Engine", "Interactive", "Simulation"],
        icon: ProjectIcon::Gamepad,
        github: "https://github.com/FaresFehri10/dream_ball",
        gradient: Gradient::OrangeRed,
    },
    Project {
        title: "Benchmarking",
        description: "Performance analysis and optimization toolkit for measuring system \
                      capabilities.",
        tech: &["Performance Testing", "Analysis", "Optimization"],
        icon: ProjectIcon::BarChart,
        github: "https://github.com/FaresFehri10/Benchmarking",
        gradient: Gradient::GreenEmerald,
    },
];

/// A named group of related skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// The four skill categories, in render order.
pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        name: "Programming",
        skills: &["Python", "JavaScript", "Java", "C++"],
    },
    SkillCategory {
        name: "AI/ML",
        skills: &["Large Language Models", "NLP", "Deep Learning", "TensorFlow"],
    },
    SkillCategory {
        name: "Development",
        skills: &["React", "Node.js", "Git", "REST APIs"],
    },
    SkillCategory {
        name: "Tools",
        skills: &["Docker", "Linux", "VSCode", "Jupyter"],
    },
];

/// GitHub profile linked from the nav and the contact section.
pub const GITHUB_PROFILE_URL: &str = "https://github.com/FaresFehri10";

/// LinkedIn profile placeholder linked from the nav.
pub const LINKEDIN_URL: &str = "https://linkedin.com";

/// Contact mailto link.
pub const CONTACT_EMAIL_URL: &str = "mailto:fares.fehri@example.com";
