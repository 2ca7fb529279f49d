use dioxus::prelude::*;

use crate::common::icons::IconView;
use crate::components::navigation::{Logo, NavButton};
use crate::components::use_page_state;
use crate::content::{CONNECT_LINKS, COPYRIGHT, FOOTER_MISSION, RIGHTS_RESERVED};

#[component]
pub fn Footer() -> Element {
    let state = use_page_state();
    let lang = state.read().language;

    // same list the header renders
    let links = state.read().nav_links();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        Logo {}
                        p { class: "footer-mission", "{FOOTER_MISSION.get(lang)}" }
                    }
                    div {
                        h5 { class: "footer-heading", "Navigation" }
                        ul { class: "footer-links",
                            for link in links {
                                li { key: "{link.section.id()}",
                                    NavButton { link }
                                }
                            }
                        }
                    }
                    div {
                        h5 { class: "footer-heading", "Connect" }
                        div { class: "connect",
                            for (idx, (icon, href)) in CONNECT_LINKS.into_iter().enumerate() {
                                a { key: "{idx}", href,
                                    IconView { icon }
                                }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { "{COPYRIGHT} {RIGHTS_RESERVED.get(lang)}" }
                    div { class: "footer-legal",
                        span { "Privacy Policy" }
                        span { "Terms of Use" }
                    }
                }
            }
        }
    }
}
