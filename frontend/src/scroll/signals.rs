use crate::config::{HERO_EXIT_THRESHOLD_PX, PARALLAX_DAMPING};

/// Vertical extent of an element relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f64,
    pub bottom: f64,
}

/// Geometry read once per scroll tick. A `None` band means the element is not
/// in the document, and that part of the recomputation is skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSnapshot {
    pub viewport_height: f64,
    pub parallax_section: Option<Band>,
    pub hero: Option<Band>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSignals {
    pub parallax_offset: f64,
    pub hero_scrolled_past: bool,
}

impl ScrollSignals {
    pub fn recompute(self, layout: &LayoutSnapshot) -> Self {
        let mut next = self.recompute_hero(layout.hero);
        if let Some(section) = layout.parallax_section {
            // off-screen keeps the last offset so the layers don't snap
            if section.top < layout.viewport_height && section.bottom > 0.0 {
                next.parallax_offset = section.top * PARALLAX_DAMPING;
            }
        }
        next
    }

    pub fn recompute_hero(self, hero: Option<Band>) -> Self {
        match hero {
            Some(hero) => Self {
                hero_scrolled_past: hero.bottom < HERO_EXIT_THRESHOLD_PX,
                ..self
            },
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(section_top: f64, hero_bottom: f64) -> LayoutSnapshot {
        LayoutSnapshot {
            viewport_height: 800.0,
            parallax_section: Some(Band {
                top: section_top,
                bottom: section_top + 900.0,
            }),
            hero: Some(Band {
                top: hero_bottom - 800.0,
                bottom: hero_bottom,
            }),
        }
    }

    #[test]
    fn hero_flag_follows_the_threshold_both_ways() {
        let signals = ScrollSignals::default();
        let above = signals.recompute(&layout(600.0, 50.0));
        assert!(!above.hero_scrolled_past);

        let past = above.recompute(&layout(100.0, 49.0));
        assert!(past.hero_scrolled_past);

        let back = past.recompute(&layout(400.0, 51.0));
        assert!(!back.hero_scrolled_past);
    }

    #[test]
    fn same_geometry_gives_the_same_signals() {
        let geometry = layout(120.0, 10.0);
        let once = ScrollSignals::default().recompute(&geometry);
        let twice = once.recompute(&geometry);
        assert_eq!(once, twice);
    }

    #[test]
    fn parallax_tracks_the_section_while_visible() {
        let signals = ScrollSignals::default().recompute(&layout(500.0, 900.0));
        assert!((signals.parallax_offset - 150.0).abs() < 1e-9);

        let signals = signals.recompute(&layout(-200.0, -100.0));
        assert!((signals.parallax_offset + 60.0).abs() < 1e-9);
    }

    #[test]
    fn parallax_is_kept_while_the_section_is_off_screen() {
        let visible = ScrollSignals::default().recompute(&layout(700.0, 900.0));
        let offset = visible.parallax_offset;

        // below the fold
        let below = visible.recompute(&layout(800.0, 900.0));
        assert_eq!(below.parallax_offset, offset);

        // scrolled fully past: bottom = -900 + 900 = 0
        let above = below.recompute(&layout(-900.0, -2_000.0));
        assert_eq!(above.parallax_offset, offset);

        let back = above.recompute(&layout(300.0, -2_000.0));
        assert!((back.parallax_offset - 90.0).abs() < 1e-9);
    }

    #[test]
    fn missing_elements_skip_their_part() {
        let start = ScrollSignals {
            parallax_offset: 42.0,
            hero_scrolled_past: true,
        };
        let layout = LayoutSnapshot {
            viewport_height: 800.0,
            parallax_section: None,
            hero: None,
        };
        assert_eq!(start.recompute(&layout), start);
    }
}
