use crate::config::{TrackerConfig, BOTTOM_SECTION, FALLBACK_SECTION};
use crate::content::NavLink;

/// Window and document measurements sampled on a scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Resolves the top offset of a section element by id.
pub trait SectionLayout {
    fn section_top(&self, id: &str) -> Option<f64>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollSnapshot {
    pub show_back_to_top: bool,
    pub active_section: String,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    config: TrackerConfig,
}

impl ScrollTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn snapshot(
        &self,
        metrics: ScrollMetrics,
        links: &[NavLink],
        layout: &impl SectionLayout,
    ) -> ScrollSnapshot {
        ScrollSnapshot {
            show_back_to_top: self.shows_back_to_top(metrics.scroll_y),
            active_section: self.active_section(metrics, links, layout).to_string(),
        }
    }

    pub fn shows_back_to_top(&self, scroll_y: f64) -> bool {
        scroll_y > self.config.back_to_top_threshold
    }

    /// Last link whose section top, less the activation offset, is at or
    /// above `scroll_y`. Near the document bottom the last section wins.
    pub fn active_section<'a>(
        &self,
        metrics: ScrollMetrics,
        links: &'a [NavLink],
        layout: &impl SectionLayout,
    ) -> &'a str {
        if self.at_bottom(metrics) {
            return BOTTOM_SECTION;
        }

        let mut current = FALLBACK_SECTION;
        for link in links {
            let id = link.section_id();
            if let Some(top) = layout.section_top(id) {
                if metrics.scroll_y >= top - self.config.activation_offset {
                    current = id;
                }
            }
        }
        current
    }

    fn at_bottom(&self, metrics: ScrollMetrics) -> bool {
        metrics.viewport_height + metrics.scroll_y >= metrics.document_height - self.config.bottom_slack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeLayout(HashMap<&'static str, f64>);

    impl SectionLayout for FakeLayout {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.0.get(id).copied()
        }
    }

    fn links() -> Vec<NavLink> {
        ["home", "about", "skills", "projects", "contact"]
            .into_iter()
            .map(|id| NavLink {
                href: format!("#{id}"),
                label: id.to_string(),
            })
            .collect()
    }

    fn layout() -> FakeLayout {
        FakeLayout(HashMap::from([
            ("home", 0.0),
            ("about", 800.0),
            ("skills", 1_600.0),
            ("projects", 2_600.0),
            ("contact", 3_400.0),
        ]))
    }

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            viewport_height: 700.0,
            document_height: 10_000.0,
        }
    }

    #[test]
    fn back_to_top_appears_only_past_threshold() {
        let tracker = ScrollTracker::default();
        assert!(!tracker.shows_back_to_top(0.0));
        assert!(!tracker.shows_back_to_top(299.0));
        assert!(!tracker.shows_back_to_top(300.0));
        assert!(tracker.shows_back_to_top(300.5));
        assert!(tracker.shows_back_to_top(301.0));
    }

    #[test]
    fn each_section_activates_at_its_offset_boundary() {
        let tracker = ScrollTracker::default();
        let links = links();
        let layout = layout();
        let boundaries = [
            ("about", 650.0),
            ("skills", 1_450.0),
            ("projects", 2_450.0),
            ("contact", 3_250.0),
        ];

        let mut previous = "home";
        for (id, boundary) in boundaries {
            assert_eq!(tracker.active_section(metrics(boundary - 1.0), &links, &layout), previous);
            assert_eq!(tracker.active_section(metrics(boundary), &links, &layout), id);
            previous = id;
        }
        assert_eq!(tracker.active_section(metrics(0.0), &links, &layout), "home");
    }

    #[test]
    fn later_sections_override_earlier_matches() {
        let tracker = ScrollTracker::default();
        let layout = FakeLayout(HashMap::from([("home", 0.0), ("about", 100.0), ("skills", 120.0)]));
        assert_eq!(tracker.active_section(metrics(0.0), &links(), &layout), "skills");
    }

    #[test]
    fn missing_sections_never_match() {
        let tracker = ScrollTracker::default();
        let layout = FakeLayout(HashMap::from([("about", 800.0)]));
        assert_eq!(tracker.active_section(metrics(400.0), &links(), &layout), "home");
        assert_eq!(tracker.active_section(metrics(700.0), &links(), &layout), "about");
    }

    #[test]
    fn bottom_of_page_forces_contact() {
        let tracker = ScrollTracker::default();
        let near_bottom = ScrollMetrics {
            scroll_y: 1_000.0,
            viewport_height: 700.0,
            document_height: 1_750.0,
        };
        assert_eq!(tracker.active_section(near_bottom, &links(), &layout()), "contact");

        let just_above = ScrollMetrics {
            document_height: 1_750.5,
            ..near_bottom
        };
        assert_eq!(tracker.active_section(just_above, &links(), &layout()), "about");
    }

    #[test]
    fn snapshot_combines_both_derived_flags() {
        let tracker = ScrollTracker::default();
        let snapshot = tracker.snapshot(metrics(1_500.0), &links(), &layout());
        assert_eq!(
            snapshot,
            ScrollSnapshot {
                show_back_to_top: true,
                active_section: "skills".to_string(),
            }
        );
    }
}
