use dioxus::prelude::*;

use crate::common::config::SITE;
use crate::common::host::BrowserHost;
use crate::common::icons::{Icon, IconView};
use crate::common::state::Section;
use crate::components::cards::{AudienceCard, NewsCard, ProjectCard, SectionHeading, ThematicCard};
use crate::components::use_page_state;
use crate::content::{
    APPROACH_DESC, APPROACH_TITLE, Audience, CONTACT_BANNER, GET_INVOLVED, HERO_IMAGE,
    NEWS, PARTNERS, PARTNERS_SUBTITLE, PROJECTS, THEMATIC_SUBTITLE,
    ThematicArea,
};

#[component]
fn About() -> Element {
    let mut state = use_page_state();
    let lang = state.read().language;
    let t = state.read().translation();

    rsx! {
        section { id: Section::About.id(), class: "about",
            div { class: "container",
                div { class: "about-grid",
                    div {
                        div { class: "badge",
                            IconView { icon: Icon::Cpu, size: 14 }
                            span { "{t.hero_subtitle}" }
                        }
                        h1 { class: "display-title", "{t.about_title}" }
                        div { class: "lead",
                            p { "{t.about_desc1}" }
                            p { "{t.about_desc2}" }
                            p { "{t.about_desc3}" }
                        }
                        div { class: "about-actions",
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    state.with_mut(|s| s.scroll_to_section(&BrowserHost, Section::Contact.id()))
                                },
                                "{GET_INVOLVED.get(lang)}"
                            }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| {
                                    state.with_mut(|s| s.scroll_to_section(&BrowserHost, Section::Thematic.id()))
                                },
                                "{t.nav_thematic}"
                            }
                        }
                    }

                    div { class: "hero-visual",
                        img { src: HERO_IMAGE, alt: "AI impact visual" }
                        div { class: "approach glass",
                            div { class: "approach-head",
                                div { class: "icon-wrap",
                                    IconView { icon: Icon::BookOpen, size: 24 }
                                }
                                span { "{APPROACH_TITLE.get(lang)}" }
                            }
                            p { "{APPROACH_DESC.get(lang)}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Thematic() -> Element {
    let state = use_page_state();
    let lang = state.read().language;
    let t = state.read().translation();

    rsx! {
        section { id: Section::Thematic.id(), class: "alt",
            div { class: "container",
                SectionHeading { subtitle: THEMATIC_SUBTITLE.get(lang), "{t.thematic_title}" }
                div { class: "grid-3",
                    for area in ThematicArea::all() {
                        ThematicCard { key: "{area:?}", area }
                    }
                }
            }
        }
    }
}

#[component]
fn Projects() -> Element {
    let state = use_page_state();
    let t = state.read().translation();

    rsx! {
        section { id: Section::Projects.id(),
            div { class: "container",
                SectionHeading { "{t.projects_title}" }
                div { class: "grid-2",
                    for (idx, project) in PROJECTS.into_iter().enumerate() {
                        ProjectCard { key: "{idx}", project }
                    }
                }
            }
        }
    }
}

#[component]
fn Partners() -> Element {
    let state = use_page_state();
    let lang = state.read().language;
    let t = state.read().translation();

    rsx! {
        section { class: "alt partners",
            div { class: "container",
                SectionHeading { subtitle: PARTNERS_SUBTITLE.get(lang), "{t.partners_title}" }
                div { class: "partner-row",
                    for partner in PARTNERS {
                        div { key: "{partner}", class: "partner", "{partner}" }
                    }
                }
            }
        }
    }
}

#[component]
fn News() -> Element {
    let state = use_page_state();
    let t = state.read().translation();

    rsx! {
        section { id: Section::News.id(),
            div { class: "container",
                SectionHeading { "{t.news_title}" }
                div { class: "grid-3",
                    for (idx, item) in NEWS.into_iter().enumerate() {
                        NewsCard { key: "{idx}", item }
                    }
                }
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    let state = use_page_state();
    let lang = state.read().language;
    let t = state.read().translation();

    let mailto = SITE.mailto();
    let address = SITE.contact_email.to_uppercase();

    rsx! {
        section { id: Section::Contact.id(), class: "alt",
            div { class: "container",
                div { class: "contact-head",
                    h2 { class: "display-title", "{t.contact_title}" }
                    p { "{t.contact_desc}" }
                }

                div { class: "grid-3",
                    for audience in Audience::all() {
                        AudienceCard { key: "{audience:?}", audience }
                    }
                }

                div { class: "mail-banner",
                    h3 { "{CONTACT_BANNER.get(lang)}" }
                    a { class: "mail-link", href: "{mailto}",
                        IconView { icon: Icon::Mail, size: 28 }
                        span { "{address}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            About {}
            Thematic {}
            Projects {}
            Partners {}
            News {}
            Contact {}
        }
    }
}
