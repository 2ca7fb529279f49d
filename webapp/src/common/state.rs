use tracing::debug;

use crate::common::config::SITE;
use crate::common::host::PageHost;
use crate::common::i18n::{Translation, translations};
use crate::common::{Language, Theme};

/// Sections that navigation can jump to. The ids are stable and shared by
/// the header, the footer and the call-to-action buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Thematic,
    Projects,
    News,
    Contact,
}

impl Section {
    pub fn all() -> [Self; 5] {
        [
            Self::About,
            Self::Thematic,
            Self::Projects,
            Self::News,
            Self::Contact,
        ]
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Thematic => "thematic",
            Self::Projects => "projects",
            Self::News => "news",
            Self::Contact => "contact",
        }
    }

    pub fn label(self, t: &Translation) -> &'static str {
        match self {
            Self::About => t.nav_about,
            Self::Thematic => t.nav_thematic,
            Self::Projects => t.nav_projects,
            Self::News => t.nav_news,
            Self::Contact => t.nav_contact,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: Section,
}

pub fn nav_links(t: &Translation) -> [NavLink; 5] {
    Section::all().map(|section| NavLink {
        label: section.label(t),
        section,
    })
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SITE.scroll_threshold
}

/// Everything on the page that changes after load.
///
/// A single instance is shared through a Dioxus context signal; none of it
/// is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub language: Language,
    pub theme: Theme,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            language: SITE.default_language,
            theme: SITE.default_theme,
            menu_open: false,
            scrolled: false,
        }
    }
}

impl PageState {
    pub fn translation(&self) -> &'static Translation {
        translations(self.language)
    }

    pub fn nav_links(&self) -> [NavLink; 5] {
        nav_links(self.translation())
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.other();
        debug!("language switched to {}", self.language);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.other();
        debug!("theme switched to {}", self.theme);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Updates the scrolled flag for a vertical offset. Returns true when the
    /// flag changed, so callers can skip redundant signal writes.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Smooth-scrolls to the element with the given id, leaving room for the
    /// fixed header. Unknown ids scroll nowhere. The mobile menu is closed
    /// either way.
    pub fn scroll_to_section<H: PageHost>(&mut self, host: &H, id: &str) {
        match host.anchor_offset(id) {
            Some(top) => host.smooth_scroll_to(top - SITE.header_offset),
            None => debug!("no element with id {id}, not scrolling"),
        }
        self.close_menu();
    }

    pub fn scroll_to_top<H: PageHost>(&mut self, host: &H) {
        host.smooth_scroll_to(0.0);
        self.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::common::host::testing::FakeHost;
    use crate::common::i18n::{EN, TR};

    #[test]
    fn defaults() {
        let state = PageState::default();
        assert_eq!(state.language, Language::Tr);
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn language_round_trip() {
        let mut state = PageState::default();
        state.toggle_language();
        assert_eq!(state.language, Language::En);
        state.toggle_language();
        assert_eq!(state, PageState::default());
    }

    #[test]
    fn theme_round_trip() {
        let mut state = PageState::default();
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Light);
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn toggling_language_switches_all_copy() {
        let mut state = PageState::default();
        assert_eq!(state.translation(), &TR);

        state.toggle_language();
        assert_eq!(state.translation(), &EN);
        let labels: Vec<&str> = state.nav_links().iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            ["About", "Thematic Areas", "Projects", "News", "Contact"]
        );
    }

    #[test]
    fn nav_links_follow_section_order() {
        for lang in Language::all() {
            let state = PageState {
                language: lang,
                ..PageState::default()
            };
            let ids: Vec<&str> = state.nav_links().iter().map(|l| l.section.id()).collect();
            assert_eq!(ids, ["about", "thematic", "projects", "news", "contact"]);
        }
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        let mut state = PageState::default();
        assert!(!state.observe_scroll(0.0));
        assert!(!state.scrolled);

        assert!(!state.observe_scroll(50.0));
        assert!(!state.scrolled);

        assert!(state.observe_scroll(51.0));
        assert!(state.scrolled);

        // staying above the line is not a change
        assert!(!state.observe_scroll(400.0));

        assert!(state.observe_scroll(10.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn scroll_to_known_section_subtracts_header() {
        let host = FakeHost::with_anchor("contact", 2400.0);
        let mut state = PageState {
            menu_open: true,
            ..PageState::default()
        };

        state.scroll_to_section(&host, Section::Contact.id());

        assert_eq!(host.scrolls(), vec![2320.0]);
        assert!(!state.menu_open);
    }

    #[test]
    fn scroll_to_unknown_section_only_closes_menu() {
        let host = FakeHost::with_anchor("about", 0.0);
        let before = PageState {
            language: Language::En,
            theme: Theme::Light,
            menu_open: true,
            scrolled: true,
        };
        let mut state = before;

        state.scroll_to_section(&host, "missing");

        assert!(host.scrolls().is_empty());
        assert_eq!(
            state,
            PageState {
                menu_open: false,
                ..before
            }
        );
    }

    #[test]
    fn scroll_to_top_goes_to_origin() {
        let host = FakeHost::default();
        let mut state = PageState {
            menu_open: true,
            ..PageState::default()
        };
        state.scroll_to_top(&host);
        assert_eq!(host.scrolls(), vec![0.0]);
        assert!(!state.menu_open);
    }

    #[test]
    fn menu_toggle() {
        let mut state = PageState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }
}
