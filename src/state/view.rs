#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::util::scroll;

/// One of the five anchorable content sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// All sections in document order. Detection walks this order and the
    /// nav renders one button per entry.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the section element.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Label shown on the nav button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

/// Raw pointer coordinates in viewport (client) space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Top-level view state for the page.
///
/// Mutated only by browser input events (scroll, mouse move); reset on page
/// reload; never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub active_section: Section,
    pub is_scrolled: bool,
    pub pointer: PointerPosition,
}

impl ViewState {
    /// Record a scroll observation.
    ///
    /// The scrolled flag tracks whether the offset exceeds the nav styling
    /// threshold. The active section is reassigned only when detection
    /// produced a match; otherwise the previous value is kept, so it is
    /// always one of the five known sections by construction.
    pub fn note_scroll(&mut self, offset: f64, detected: Option<Section>) {
        self.is_scrolled = scroll::is_scrolled(offset);
        if let Some(section) = detected {
            self.active_section = section;
        }
    }

    /// Record raw pointer coordinates. Every event overwrites the previous
    /// value; there is no smoothing, clamping, or throttling.
    pub fn note_pointer(&mut self, x: f64, y: f64) {
        self.pointer = PointerPosition { x, y };
    }
}
