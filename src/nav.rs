//! Navigation surface, scroll-position section tracking and the page state
//! owned by the root component.

use crate::theme::Theme;

/// Pixels added to the scroll offset to account for the fixed nav bar.
pub const NAV_OFFSET: f64 = 150.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Education,
    Experience,
    Projects,
    Skills,
    Certificates,
}

impl Section {
    /// Element id of the rendered section.
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Certificates => "certificates",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: Section,
}

pub const NAV_LINKS: [NavLink; 7] = [
    NavLink {
        label: "Home",
        section: Section::Hero,
    },
    NavLink {
        label: "About",
        section: Section::About,
    },
    NavLink {
        label: "Education",
        section: Section::Education,
    },
    NavLink {
        label: "Experience",
        section: Section::Experience,
    },
    NavLink {
        label: "Projects",
        section: Section::Projects,
    },
    NavLink {
        label: "Skills",
        section: Section::Skills,
    },
    NavLink {
        label: "Certificates",
        section: Section::Certificates,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Half-open: `top` is inside, `top + height` is not.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Read access to the geometry of rendered sections. Implementations must
/// query the live layout on every call.
pub trait SectionLayout {
    /// `None` when the section is not rendered.
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}

pub trait Viewport: SectionLayout {
    fn scroll_y(&self) -> f64;

    /// Smoothly scrolls the section into view. Returns `false` when the
    /// section is not rendered.
    fn scroll_into_view(&self, section: Section) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTracker {
    nav_offset: f64,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(NAV_OFFSET)
    }
}

impl SectionTracker {
    pub fn new(nav_offset: f64) -> Self {
        Self { nav_offset }
    }

    /// Works out which section the nav bar should highlight.
    ///
    /// Every link is tested in order and the last match wins, so when two
    /// sections overlap the one declared later is reported. When nothing
    /// matches `previous` is kept.
    pub fn resolve<L>(
        &self,
        scroll_y: f64,
        links: &[NavLink],
        layout: &L,
        previous: Section,
    ) -> Section
    where
        L: SectionLayout + ?Sized,
    {
        let position = scroll_y + self.nav_offset;
        let mut active = previous;
        for link in links {
            let Some(bounds) = layout.bounds(link.section) else {
                continue;
            };
            if bounds.contains(position) {
                active = link.section;
            }
        }
        active
    }
}

/// Fraction of the page scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub theme: Theme,
    pub menu_open: bool,
    pub active: Section,
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the mobile menu and scrolls to `section`. The menu is closed
    /// even when the section isn't rendered; the return value reports
    /// whether a scroll was requested.
    pub fn navigate<V>(&mut self, section: Section, viewport: &V) -> bool
    where
        V: Viewport + ?Sized,
    {
        self.menu_open = false;
        viewport.scroll_into_view(section)
    }

    /// Recomputes the active section from the current scroll offset.
    /// Returns `true` if it changed.
    pub fn track_scroll<V>(&mut self, tracker: &SectionTracker, viewport: &V) -> bool
    where
        V: Viewport + ?Sized,
    {
        let active = tracker.resolve(viewport.scroll_y(), &NAV_LINKS, viewport, self.active);
        let changed = active != self.active;
        self.active = active;
        changed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakePage {
        sections: HashMap<Section, SectionBounds>,
        scroll_y: f64,
        scrolled_to: RefCell<Vec<Section>>,
    }

    impl FakePage {
        fn with(mut self, section: Section, top: f64, height: f64) -> Self {
            self.sections.insert(section, SectionBounds { top, height });
            self
        }

        fn scrolled(mut self, scroll_y: f64) -> Self {
            self.scroll_y = scroll_y;
            self
        }
    }

    impl SectionLayout for FakePage {
        fn bounds(&self, section: Section) -> Option<SectionBounds> {
            self.sections.get(&section).copied()
        }
    }

    impl Viewport for FakePage {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn scroll_into_view(&self, section: Section) -> bool {
            if self.sections.contains_key(&section) {
                self.scrolled_to.borrow_mut().push(section);
                true
            } else {
                false
            }
        }
    }

    const A: Section = Section::Hero;
    const B: Section = Section::About;

    fn two_sections() -> FakePage {
        FakePage::default().with(A, 0.0, 800.0).with(B, 800.0, 800.0)
    }

    #[test]
    fn test_resolve_boundaries() {
        let page = two_sections();
        let tracker = SectionTracker::default();
        let resolve = |s| tracker.resolve(s, &NAV_LINKS, &page, Section::Skills);
        assert_eq!(resolve(0.0), A);
        assert_eq!(resolve(649.0), A);
        // 650 + 150 == 800 is the first pixel of B
        assert_eq!(resolve(650.0), B);
        assert_eq!(resolve(700.0), B);
        assert_eq!(resolve(1449.0), B);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let page = two_sections();
        let tracker = SectionTracker::default();
        for s in [0.0, 123.5, 650.0, 900.0, 5000.0] {
            let first = tracker.resolve(s, &NAV_LINKS, &page, A);
            let second = tracker.resolve(s, &NAV_LINKS, &page, A);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_overlap_later_section_wins() {
        let page = FakePage::default()
            .with(Section::Education, 0.0, 1000.0)
            .with(Section::Experience, 500.0, 1000.0);
        let tracker = SectionTracker::default();
        assert_eq!(
            tracker.resolve(400.0, &NAV_LINKS, &page, Section::Hero),
            Section::Experience
        );
        assert_eq!(
            tracker.resolve(100.0, &NAV_LINKS, &page, Section::Hero),
            Section::Education
        );
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let page = two_sections();
        let tracker = SectionTracker::default();
        assert_eq!(
            tracker.resolve(10_000.0, &NAV_LINKS, &page, Section::Projects),
            Section::Projects
        );
        let empty = FakePage::default();
        assert_eq!(
            tracker.resolve(0.0, &NAV_LINKS, &empty, Section::Skills),
            Section::Skills
        );
    }

    #[test]
    fn test_resolve_respects_link_order() {
        let page = FakePage::default()
            .with(Section::Education, 0.0, 1000.0)
            .with(Section::Experience, 0.0, 1000.0);
        let tracker = SectionTracker::new(0.0);
        let reversed = [NAV_LINKS[3], NAV_LINKS[2]];
        assert_eq!(
            tracker.resolve(10.0, &reversed, &page, Section::Hero),
            Section::Education
        );
    }

    #[test]
    fn test_navigate_closes_menu_without_target() {
        let page = two_sections();
        let mut state = PageState::default();
        state.toggle_menu();
        assert!(state.menu_open);

        assert!(!state.navigate(Section::Certificates, &page));
        assert!(!state.menu_open);
        assert!(page.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn test_navigate_scrolls_to_target() {
        let page = two_sections();
        let mut state = PageState::default();
        state.toggle_menu();
        assert!(state.navigate(B, &page));
        assert!(!state.menu_open);
        assert_eq!(*page.scrolled_to.borrow(), vec![B]);
    }

    #[test]
    fn test_track_scroll() {
        let mut state = PageState::new(Theme::Mech);
        let tracker = SectionTracker::default();
        assert!(state.track_scroll(&tracker, &two_sections().scrolled(900.0)));
        assert_eq!(state.active, B);
        assert!(!state.track_scroll(&tracker, &two_sections().scrolled(1000.0)));
        assert!(state.track_scroll(&tracker, &two_sections().scrolled(0.0)));
        assert_eq!(state.active, A);
        assert_eq!(state.theme, Theme::Mech);
    }

    #[test]
    fn test_toggle_theme_twice() {
        let mut state = PageState::default();
        let before = state;
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Mech);
        state.toggle_theme();
        assert_eq!(state, before);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
    }
}
