//! Scroll tracking and smooth-scroll navigation.
//!
//! The geometry rules (`is_scrolled`, `active_section`) are pure functions
//! over measured bounds so they test natively. The DOM side measures live
//! section elements and degrades silently when no browser is present or an
//! element is missing.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::view::Section;

/// Vertical offset past which the nav switches to its scrolled styling.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Distance from the viewport top at which a section counts as current.
pub const SECTION_PROBE_PX: f64 = 100.0;

/// Measured vertical extent of a section element, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    /// Whether the probe line at [`SECTION_PROBE_PX`] falls inside this box.
    #[must_use]
    pub fn contains_probe(self) -> bool {
        self.top <= SECTION_PROBE_PX && self.bottom >= SECTION_PROBE_PX
    }
}

/// Whether the page has scrolled past [`SCROLL_THRESHOLD_PX`].
#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// The first section whose bounds straddle the probe line, in document
/// order. `None` means no section matched; the caller keeps the previous
/// active section in that case.
#[must_use]
pub fn active_section(bounds: &[(Section, SectionBounds)]) -> Option<Section> {
    bounds
        .iter()
        .find(|(_, b)| b.contains_probe())
        .map(|(section, _)| *section)
}

/// Current vertical scroll offset of the window. Zero outside a browser.
#[must_use]
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0))
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Measure the bounding boxes of every section present in the document.
/// Sections whose element is missing are skipped.
#[must_use]
pub fn measure_sections() -> Vec<(Section, SectionBounds)> {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        Section::ALL
            .iter()
            .filter_map(|&section| {
                let element = document.get_element_by_id(section.id())?;
                let rect = element.get_bounding_client_rect();
                Some((
                    section,
                    SectionBounds { top: rect.top(), bottom: rect.bottom() },
                ))
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Detect the currently active section from live DOM geometry.
#[must_use]
pub fn detect_active_section() -> Option<Section> {
    active_section(&measure_sections())
}

/// Smoothly scroll the section's element into view. No-op when the element
/// does not exist at call time.
pub fn scroll_to_section(section: Section) {
    #[cfg(feature = "csr")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.id()))
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = section;
    }
}
