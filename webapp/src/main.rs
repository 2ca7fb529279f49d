#![allow(non_snake_case)]
use dioxus::prelude::*;

mod common;
use common::config::SITE;
use common::host::{use_scroll_watcher, use_theme_sync};
use common::state::PageState;

mod components;
use components::footer::Footer;
use components::navigation::NavBar;

mod content;

mod home;
use home::Home;

fn main() {
    dioxus_logger::init(SITE.log_level).expect("failed to init logger");
    launch(App);
}

// Language, theme and the transient UI flags live in one signal provided
// here, so every section reads the same state and nothing is global.
#[component]
pub fn App() -> Element {
    let state = use_context_provider(|| Signal::new(PageState::default()));

    use_scroll_watcher(state);
    use_theme_sync(state);

    let title = state.read().translation().hero_title;

    rsx! {
        document::Title { "{title}" }
        style { "{common::style::SITE_STYLES}" }
        div { class: "page",
            NavBar {}
            Home {}
            Footer {}
        }
    }
}
