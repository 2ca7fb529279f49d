use dioxus::prelude::*;

use crate::common::Theme;
use crate::common::host::BrowserHost;
use crate::common::icons::{Icon, IconView};
use crate::common::state::{NavLink, PageState};
use crate::components::use_page_state;

#[derive(Clone, PartialEq, Props)]
pub struct NavButtonProps {
    link: NavLink,
}

#[component]
pub fn NavButton(props: NavButtonProps) -> Element {
    let mut state = use_page_state();
    let section = props.link.section;
    let label = props.link.label;

    rsx! {
        button {
            class: "nav-link",
            onclick: move |_| state.with_mut(|s| s.scroll_to_section(&BrowserHost, section.id())),
            "{label}"
        }
    }
}

#[component]
pub fn Logo() -> Element {
    let mut state = use_page_state();

    rsx! {
        div {
            class: "logo",
            onclick: move |_| state.with_mut(|s| s.scroll_to_top(&BrowserHost)),
            div { class: "logo-mark", "AI" }
            span { class: "logo-word", "xIMPACT" }
        }
    }
}

// Shows the language the click will switch to, not the current one
#[component]
pub fn LanguageToggle() -> Element {
    let mut state = use_page_state();
    let next = state.read().language.other();

    rsx! {
        button {
            class: "lang-btn",
            onclick: move |_| state.with_mut(|s| s.toggle_language()),
            "{next}"
        }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_page_state();

    let icon = match state.read().theme {
        Theme::Light => Icon::Moon,
        Theme::Dark => Icon::Sun,
    };

    rsx! {
        button {
            class: "icon-btn",
            aria_label: "Toggle Theme",
            onclick: move |_| state.with_mut(|s| s.toggle_theme()),
            IconView { icon }
        }
    }
}

#[component]
fn MobileMenu() -> Element {
    let state = use_page_state();
    let links = state.read().nav_links();

    rsx! {
        div { class: "mobile-menu",
            div { class: "mobile-menu-links",
                for link in links {
                    NavButton { key: "{link.section.id()}", link }
                }
                div { class: "nav-toggles",
                    LanguageToggle {}
                    ThemeToggle {}
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let mut state = use_page_state();

    let PageState {
        menu_open,
        scrolled,
        ..
    } = *state.read();
    let links = state.read().nav_links();

    rsx! {
        nav { class: if scrolled { "site-nav scrolled" } else { "site-nav" },
            div { class: "container",
                Logo {}

                div { class: "nav-links",
                    for link in links {
                        NavButton { key: "{link.section.id()}", link }
                    }
                    div { class: "nav-toggles",
                        LanguageToggle {}
                        ThemeToggle {}
                    }
                }

                button {
                    class: "icon-btn menu-btn",
                    onclick: move |_| state.with_mut(|s| s.toggle_menu()),
                    IconView {
                        icon: if menu_open { Icon::Close } else { Icon::Menu },
                        size: 28,
                    }
                }
            }
        }

        if menu_open {
            MobileMenu {}
        }
    }
}
