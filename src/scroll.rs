use log::warn;
use web_sys::{window, HtmlElement};
use wasm_bindgen::JsCast;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    /// Page order, which is also the order sections are matched in.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// The element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the nav bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: SectionId,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.offset_height
    }
}

/// First section whose extent contains the scroll position plus the lookahead.
pub fn active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Option<SectionId> {
    let position = scroll_y + config::SECTION_LOOKAHEAD;
    bounds
        .iter()
        .find(|b| b.contains(position))
        .map(|b| b.section)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_THRESHOLD
}

/// Share of the scrollable distance already scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Upward shift for a parallax layer: linear from 0 to `-max_shift` over the
/// parallax range, held at `-max_shift` past it.
pub fn parallax_offset(scroll_y: f64, max_shift: f64) -> f64 {
    let t = (scroll_y / config::PARALLAX_RANGE).clamp(0.0, 1.0);
    -max_shift * t
}

/// Whether a block whose top edge sits at `top` (relative to the viewport)
/// has come into view.
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * config::REVEAL_VIEWPORT_RATIO
}

pub fn current_scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn document_scroll_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Reads the current layout of every section present in the document.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    SectionId::ALL
        .iter()
        .filter_map(|&section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                section,
                offset_top: element.offset_top() as f64,
                offset_height: element.offset_height() as f64,
            })
        })
        .collect()
}

/// Scrolls the section into view. Smooth scrolling comes from the page
/// stylesheet.
pub fn scroll_to_section(section: SectionId) {
    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    {
        Some(element) => element.scroll_into_view(),
        None => warn!("No element for section '{}'", section.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        let heights = [800.0, 600.0, 1200.0, 1500.0, 900.0, 1000.0];
        let mut top = 0.0;
        SectionId::ALL
            .iter()
            .zip(heights)
            .map(|(&section, height)| {
                let b = SectionBounds { section, offset_top: top, offset_height: height };
                top += height;
                b
            })
            .collect()
    }

    #[test]
    fn every_position_in_a_section_selects_it() {
        let bounds = layout();
        for b in &bounds {
            let first = b.offset_top - config::SECTION_LOOKAHEAD;
            let last = b.offset_top + b.offset_height - config::SECTION_LOOKAHEAD - 1.0;
            let mut y = first;
            while y <= last {
                assert_eq!(active_section(y, &bounds), Some(b.section), "scroll_y = {}", y);
                y += 25.0;
            }
            assert_eq!(active_section(last, &bounds), Some(b.section));
        }
    }

    #[test]
    fn lookahead_switches_before_the_boundary() {
        let bounds = layout();
        // About starts at 800
        assert_eq!(active_section(699.0, &bounds), Some(SectionId::Home));
        assert_eq!(active_section(700.0, &bounds), Some(SectionId::About));
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let bounds = vec![
            SectionBounds { section: SectionId::Skills, offset_top: 0.0, offset_height: 500.0 },
            SectionBounds { section: SectionId::Projects, offset_top: 0.0, offset_height: 500.0 },
        ];
        assert_eq!(active_section(0.0, &bounds), Some(SectionId::Skills));
    }

    #[test]
    fn position_past_last_section_matches_nothing() {
        let bounds = layout();
        let end: f64 = bounds.iter().map(|b| b.offset_height).sum();
        assert_eq!(active_section(end, &bounds), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn scrolled_flag_is_strictly_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn progress_of_unscrollable_page_is_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn parallax_is_linear_then_held() {
        assert_eq!(parallax_offset(0.0, 50.0), 0.0);
        assert_eq!(parallax_offset(150.0, 50.0), -25.0);
        assert_eq!(parallax_offset(300.0, 100.0), -100.0);
        assert_eq!(parallax_offset(900.0, 100.0), -100.0);
    }

    #[test]
    fn reveal_threshold() {
        assert!(should_reveal(0.0, 1000.0));
        assert!(should_reveal(899.0, 1000.0));
        assert!(!should_reveal(900.0, 1000.0));
        assert!(should_reveal(-400.0, 1000.0));
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids: Vec<_> = SectionId::ALL.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SectionId::ALL.len());
    }
}
