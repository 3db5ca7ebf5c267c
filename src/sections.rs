use std::{fmt, str::FromStr};

use thiserror::Error;

/// Scroll offset past which the navigation bar turns opaque.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub const fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    /// One single-id selector per landmark, in page order. Each must be
    /// looked up on its own: a joined selector only ever yields the first match.
    pub fn observer_targets() -> [String; 5] {
        Self::ALL.map(|s| s.href())
    }
}

/// Look every landmark up through `query`, keeping page order and skipping
/// the ones not in the current document.
pub fn resolve_targets<T>(mut query: impl FnMut(&str) -> Option<T>) -> Vec<T> {
    Section::observer_targets()
        .iter()
        .filter_map(|selector| {
            let found = query(selector);
            if found.is_none() {
                log::debug!("landmark {selector} not mounted");
            }
            found
        })
        .collect()
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section: {0:?}")]
    Unknown(String),
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

/// Horizontal slice of the viewport, as fractions of its height, in which a
/// landmark counts as current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityBand {
    pub top: f64,
    pub bottom: f64,
}

impl Default for VisibilityBand {
    fn default() -> Self {
        Self {
            top: 0.2,
            bottom: 0.4,
        }
    }
}

impl VisibilityBand {
    /// Root margin shrinking the observer viewport down to the band.
    pub fn root_margin(&self) -> String {
        let top = (self.top * 100.0).round();
        let bottom = ((1.0 - self.bottom) * 100.0).round();
        format!("-{top}% 0px -{bottom}% 0px")
    }

    /// Whether an element spanning `[top, bottom)` in viewport pixels overlaps the band.
    pub fn intersects(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let band_top = viewport_height * self.top;
        let band_bottom = viewport_height * self.bottom;
        top < band_bottom && bottom > band_top
    }
}

/// Which landmark is current. Fed by intersection reports only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTracker {
    active: Option<Section>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    /// Apply one batch of `(landmark id, is_intersecting)` reports.
    ///
    /// Each intersecting report replaces the active section, so when a batch
    /// holds several the last one wins. Reports of a landmark leaving the band
    /// never clear the active section.
    pub fn observe<I, S>(&mut self, entries: I) -> Option<Section>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        for (id, is_intersecting) in entries {
            if !is_intersecting {
                continue;
            }
            match id.as_ref().parse::<Section>() {
                Ok(section) => self.active = Some(section),
                Err(e) => log::warn!("ignoring intersection report: {e}"),
            }
        }
        self.active
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const VIEWPORT: f64 = 1000.0;

    /// Stand-in for the browser observer: reports only state changes.
    struct ScrollSim {
        band: VisibilityBand,
        layout: Vec<(Section, f64, f64)>,
        last: HashMap<Section, bool>,
    }

    impl ScrollSim {
        fn new(heights: &[(Section, f64)]) -> Self {
            let mut y = 0.0;
            let layout = heights
                .iter()
                .map(|(s, h)| {
                    let top = y;
                    y += h;
                    (*s, top, y)
                })
                .collect();
            Self {
                band: VisibilityBand::default(),
                layout,
                last: HashMap::new(),
            }
        }

        fn scroll_to(&mut self, scroll_y: f64) -> Vec<(String, bool)> {
            let mut changes = Vec::new();
            for (section, top, bottom) in &self.layout {
                let now = self
                    .band
                    .intersects(top - scroll_y, bottom - scroll_y, VIEWPORT);
                if self.last.get(section) != Some(&now) {
                    self.last.insert(*section, now);
                    changes.push((section.id().to_string(), now));
                }
            }
            changes
        }
    }

    #[test]
    fn test_section_ids_round_trip_in_page_order() {
        let ids = Section::ALL.map(|s| s.id());
        assert_eq!(ids, ["home", "skills", "experience", "projects", "contact"]);
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert!("about".parse::<Section>().is_err());
    }

    #[test]
    fn test_observer_targets_are_one_id_each() {
        let targets = Section::observer_targets();
        assert_eq!(
            targets,
            ["#home", "#skills", "#experience", "#projects", "#contact"].map(String::from)
        );
        for target in &targets {
            assert!(!target.contains(','));
            assert_eq!(target.matches('#').count(), 1);
        }
    }

    #[test]
    fn test_resolve_targets_finds_every_mounted_landmark() {
        let page = Section::ALL.map(|s| s.id());
        let found = resolve_targets(|selector| {
            page.iter()
                .find(|id| selector.strip_prefix('#') == Some(**id))
                .copied()
        });
        assert_eq!(found, page);
    }

    #[test]
    fn test_resolve_targets_skips_missing_landmarks() {
        let mut queried = Vec::new();
        let found = resolve_targets(|selector| {
            queried.push(selector.to_string());
            (selector == "#projects").then_some(Section::Projects)
        });
        assert_eq!(found, vec![Section::Projects]);
        assert_eq!(queried.len(), 5);

        let none: Vec<Section> = resolve_targets(|_| None);
        assert!(none.is_empty());
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(VisibilityBand::default().root_margin(), "-20% 0px -60% 0px");
    }

    #[test]
    fn test_band_intersection() {
        let band = VisibilityBand::default();
        // band spans 200..400
        assert!(band.intersects(350.0, 900.0, VIEWPORT));
        assert!(band.intersects(-500.0, 250.0, VIEWPORT));
        assert!(!band.intersects(400.0, 900.0, VIEWPORT));
        assert!(!band.intersects(-500.0, 200.0, VIEWPORT));
    }

    #[test]
    fn test_last_intersecting_report_wins() {
        let mut tracker = SectionTracker::new();
        let active = tracker.observe([("skills", true), ("projects", true)]);
        assert_eq!(active, Some(Section::Projects));

        let active = tracker.observe([("projects", true), ("skills", true)]);
        assert_eq!(active, Some(Section::Skills));
    }

    #[test]
    fn test_leaving_does_not_clear_active() {
        let mut tracker = SectionTracker::new();
        tracker.observe([("experience", true)]);
        assert_eq!(
            tracker.observe([("experience", false)]),
            Some(Section::Experience)
        );
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut tracker = SectionTracker::new();
        tracker.observe([("home", true)]);
        assert_eq!(tracker.observe([("footer", true)]), Some(Section::Home));
    }

    #[test]
    fn test_scrolling_into_projects() {
        let mut sim = ScrollSim::new(&[
            (Section::Home, 1000.0),
            (Section::Skills, 800.0),
            (Section::Experience, 1200.0),
            (Section::Projects, 900.0),
            (Section::Contact, 1000.0),
        ]);
        let mut tracker = SectionTracker::new();

        tracker.observe(sim.scroll_to(0.0));
        assert_eq!(tracker.active(), Some(Section::Home));

        tracker.observe(sim.scroll_to(1100.0));
        assert_eq!(tracker.active(), Some(Section::Skills));

        // projects now starts at 250px, inside the band, while experience
        // still reaches into it from above
        let changes = sim.scroll_to(2750.0);
        tracker.observe(changes);
        assert_eq!(tracker.active(), Some(Section::Projects));
    }

    #[test]
    fn test_short_sections_flicker_to_last_report() {
        // two short sections both inside the band in one frame
        let mut sim = ScrollSim::new(&[
            (Section::Home, 1000.0),
            (Section::Skills, 60.0),
            (Section::Experience, 60.0),
            (Section::Projects, 1000.0),
        ]);
        let mut tracker = SectionTracker::new();
        tracker.observe(sim.scroll_to(0.0));
        tracker.observe(sim.scroll_to(700.0));
        // skills 300..360 and experience 360..420 both overlap 200..400
        assert_eq!(tracker.active(), Some(Section::Experience));
    }

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }
}
