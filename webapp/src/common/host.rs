use std::rc::Rc;

use dioxus::prelude::*;
use gloo_console::error as console_error;
use gloo_events::EventListener;
use tracing::debug;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::common::state::PageState;
use crate::common::Theme;

/// What the page state needs from the document it is rendered into.
pub trait PageHost {
    /// Position of the element with this id relative to the top of the
    /// document, or None if there is no such element.
    fn anchor_offset(&self, id: &str) -> Option<f64>;

    fn scroll_offset(&self) -> f64;

    fn smooth_scroll_to(&self, top: f64);

    fn apply_theme(&self, theme: Theme);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserHost;

fn js_err<E: std::fmt::Debug>(what: &'static str) -> impl FnOnce(E) -> anyhow::Error {
    move |err| anyhow::Error::msg(format!("{what}: {err:?}"))
}

fn window() -> anyhow::Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
}

fn document() -> anyhow::Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::Error::msg("window has no document"))
}

fn root_element() -> anyhow::Result<Element> {
    document()?
        .document_element()
        .ok_or_else(|| anyhow::Error::msg("document has no root element"))
}

fn anchor_offset(id: &str) -> anyhow::Result<Option<f64>> {
    let document = document()?;

    let element = match document.get_element_by_id(id) {
        Some(val) => val,
        None => return Ok(None),
    };

    let body = document
        .body()
        .ok_or_else(|| anyhow::Error::msg("document has no body"))?;

    let element_top = element.get_bounding_client_rect().top();
    let body_top = body.get_bounding_client_rect().top();

    Ok(Some(element_top - body_top))
}

fn smooth_scroll_to(top: f64) -> anyhow::Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);

    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

fn apply_theme(theme: Theme) -> anyhow::Result<()> {
    root_element()?
        .class_list()
        .toggle_with_force("dark", theme.is_dark())
        .map_err(js_err("failed to toggle dark class"))?;
    Ok(())
}

impl PageHost for BrowserHost {
    fn anchor_offset(&self, id: &str) -> Option<f64> {
        anchor_offset(id).unwrap_or_else(|err| {
            console_error!(format!("Failed to locate #{id}: {err}"));
            None
        })
    }

    fn scroll_offset(&self) -> f64 {
        window()
            .and_then(|w| w.scroll_y().map_err(js_err("failed to read scroll offset")))
            .unwrap_or_else(|err| {
                console_error!(format!("{err}"));
                0.0
            })
    }

    fn smooth_scroll_to(&self, top: f64) {
        smooth_scroll_to(top)
            .unwrap_or_else(|err| console_error!(format!("Failed to scroll to {top}: {err}")))
    }

    fn apply_theme(&self, theme: Theme) {
        apply_theme(theme)
            .unwrap_or_else(|err| console_error!(format!("Failed to apply {theme} theme: {err}")))
    }
}

/// Reads the host's scroll offset into a copy of `current`. Returns the new
/// state only when the scrolled flag flipped, so the caller writes its signal
/// on threshold crossings and nowhere else.
pub fn scroll_transition<H: PageHost>(host: &H, current: &PageState) -> Option<PageState> {
    let mut next = *current;
    next.observe_scroll(host.scroll_offset()).then_some(next)
}

/// Keeps `PageState::scrolled` in sync with the window scroll position.
///
/// The listener lives in a hook slot, so it is removed from the window when
/// the owning component is dropped.
pub fn use_scroll_watcher(mut state: Signal<PageState>) {
    let mut observe = move || {
        let next = scroll_transition(&BrowserHost, &state.peek());
        if let Some(next) = next {
            state.set(next);
        }
    };

    use_hook(move || {
        let window = match window() {
            Ok(val) => val,
            Err(err) => {
                console_error!(format!("Failed to register scroll listener: {err}"));
                return Rc::new(None);
            }
        };

        debug!("scroll watcher registered");
        Rc::new(Some(EventListener::new(&window, "scroll", move |_| {
            observe()
        })))
    });

    // pick up a restored scroll position on first paint
    use_effect(move || observe());

    use_drop(|| debug!("scroll watcher removed"));
}

/// Mirrors the theme onto the document root. The memo keeps unrelated state
/// changes (menu, scroll flag) from reapplying it.
pub fn use_theme_sync(state: Signal<PageState>) {
    let theme = use_memo(move || state.read().theme);

    use_effect(move || BrowserHost.apply_theme(theme()));
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// Records every scroll request instead of touching a document.
    #[derive(Debug, Default)]
    pub struct FakeHost {
        pub anchors: HashMap<String, f64>,
        pub offset: f64,
        scrolls: RefCell<Vec<f64>>,
        themes: RefCell<Vec<Theme>>,
    }

    impl FakeHost {
        pub fn with_anchor(id: &str, top: f64) -> Self {
            let mut host = Self::default();
            host.anchors.insert(id.to_owned(), top);
            host
        }

        pub fn scrolls(&self) -> Vec<f64> {
            self.scrolls.borrow().clone()
        }

        pub fn themes(&self) -> Vec<Theme> {
            self.themes.borrow().clone()
        }
    }

    impl PageHost for FakeHost {
        fn anchor_offset(&self, id: &str) -> Option<f64> {
            self.anchors.get(id).copied()
        }

        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }

        fn apply_theme(&self, theme: Theme) {
            self.themes.borrow_mut().push(theme);
        }
    }

    #[test]
    fn fake_host_records_requests() {
        let host = FakeHost::with_anchor("news", 900.0);
        assert_eq!(host.anchor_offset("news"), Some(900.0));
        assert_eq!(host.anchor_offset("nope"), None);

        host.smooth_scroll_to(12.0);
        host.apply_theme(Theme::Light);
        assert_eq!(host.scrolls(), vec![12.0]);
        assert_eq!(host.themes(), vec![Theme::Light]);
    }

    #[test]
    fn crossing_the_threshold_yields_a_write() {
        let host = FakeHost {
            offset: 51.0,
            ..FakeHost::default()
        };
        let state = PageState {
            menu_open: true,
            ..PageState::default()
        };

        let next = scroll_transition(&host, &state);
        assert_eq!(
            next,
            Some(PageState {
                scrolled: true,
                ..state
            })
        );

        // already scrolled, same offset: nothing to write
        assert_eq!(scroll_transition(&host, &next.unwrap()), None);
    }

    #[test]
    fn offset_at_threshold_writes_nothing() {
        let host = FakeHost {
            offset: 50.0,
            ..FakeHost::default()
        };
        let state = PageState::default();
        assert_eq!(scroll_transition(&host, &state), None);

        // scrolling back up to the line clears the flag
        let scrolled = PageState {
            scrolled: true,
            ..state
        };
        assert_eq!(scroll_transition(&host, &scrolled), Some(state));
    }

    #[test]
    fn js_errors_carry_context() {
        let err = js_err("failed to frob")("boom");
        assert_eq!(err.to_string(), "failed to frob: \"boom\"");
    }
}
