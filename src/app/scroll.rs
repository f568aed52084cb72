// SPDX-License-Identifier: MPL-2.0
//! Scroll policy: anchor targets for the nav links and the navbar
//! hide-on-scroll rule.
//!
//! Both are pure functions so the update loop stays trivially testable. The
//! section tops are fixed pixel offsets into the laid-out page; anchor targets
//! subtract the navbar height so a section heading lands below the bar.

use crate::content::Section;
use crate::ui::design_tokens::sizing;

/// The navbar stays visible until the page has scrolled past this offset.
pub const HIDE_THRESHOLD: f32 = 100.0;

// Top offsets of each section in the laid-out page.
const HERO_TOP: f32 = 0.0;
const RATES_TOP: f32 = 620.0;
const TRUST_TOP: f32 = 1560.0;
const CONTACT_TOP: f32 = 2420.0;

/// Absolute scroll offset an anchor navigation lands on.
pub fn scroll_target(section: Section) -> f32 {
    let top = match section {
        Section::Hero => HERO_TOP,
        Section::Rates => RATES_TOP,
        Section::Trust => TRUST_TOP,
        Section::Contact => CONTACT_TOP,
    };
    (top - sizing::NAVBAR_HEIGHT).max(0.0)
}

/// Whether the navbar is visible after a scroll event: hidden while scrolling
/// downward past [`HIDE_THRESHOLD`], shown otherwise. Plain comparison, no
/// hysteresis.
pub fn navbar_visible_after(last_offset: f32, current_offset: f32) -> bool {
    !(current_offset > last_offset && current_offset > HIDE_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_target_is_page_top() {
        assert_eq!(scroll_target(Section::Hero), 0.0);
    }

    #[test]
    fn targets_are_monotonic_in_page_order() {
        let targets: Vec<f32> = Section::ALL.iter().map(|&s| scroll_target(s)).collect();
        for pair in targets.windows(2) {
            assert!(pair[0] < pair[1], "targets must increase down the page");
        }
    }

    #[test]
    fn targets_below_the_hero_account_for_the_navbar() {
        assert_eq!(
            scroll_target(Section::Rates),
            RATES_TOP - sizing::NAVBAR_HEIGHT
        );
        assert_eq!(
            scroll_target(Section::Contact),
            CONTACT_TOP - sizing::NAVBAR_HEIGHT
        );
    }

    #[test]
    fn scrolling_down_past_threshold_hides_navbar() {
        assert!(!navbar_visible_after(150.0, 200.0));
    }

    #[test]
    fn scrolling_down_near_the_top_keeps_navbar() {
        assert!(navbar_visible_after(10.0, 50.0));
    }

    #[test]
    fn scrolling_up_shows_navbar() {
        assert!(navbar_visible_after(500.0, 400.0));
    }

    #[test]
    fn unchanged_offset_shows_navbar() {
        assert!(navbar_visible_after(300.0, 300.0));
    }
}
