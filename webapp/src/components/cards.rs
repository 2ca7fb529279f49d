use dioxus::prelude::*;

use crate::common::i18n::split_ai_mark;
use crate::common::icons::{Icon, IconView};
use crate::components::use_page_state;
use crate::content::{Audience, EXPLORE_PROJECT, GET_INFO, NewsItem, Project, ThematicArea};

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    subtitle: Option<&'static str>,
    #[props(default)]
    left: bool,
    children: Element,
}

#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    rsx! {
        div { class: if props.left { "section-heading left" } else { "section-heading" },
            h2 { {props.children} }
            if let Some(subtitle) = props.subtitle {
                p { "{subtitle}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ThematicCardProps {
    area: ThematicArea,
}

#[component]
pub fn ThematicCard(props: ThematicCardProps) -> Element {
    let state = use_page_state();
    let lang = state.read().language;
    let t = state.read().translation();

    let area = props.area;
    let (mark, rest) = split_ai_mark(area.title(t));
    let tone = area.tone();

    rsx! {
        div { class: if area.featured() { "card card-xl area-card featured" } else { "card card-xl area-card" },
            div { class: "area-watermark",
                IconView { icon: area.icon(), size: 120 }
            }
            div { class: "icon-tile {tone}",
                IconView { icon: area.icon(), size: 48 }
            }
            h3 {
                if let Some(mark) = mark {
                    span { class: "ai-mark", "{mark}" }
                }
                "{rest}"
            }
            p { "{area.description(t)}" }
            ul { class: "check-list",
                for item in area.focus() {
                    li { key: "{item.en}",
                        IconView { icon: Icon::ChevronRight, size: 16 }
                        "{item.get(lang)}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: Project,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let state = use_page_state();
    let lang = state.read().language;
    let project = props.project;

    rsx! {
        div { class: "card card-xl project-card",
            div { class: "card-head",
                div { class: "icon-tile",
                    IconView { icon: project.icon, size: 32 }
                }
                div { class: "meta",
                    IconView { icon: Icon::Calendar, size: 14 }
                    "{project.period}"
                }
            }
            h3 { "{project.title.get(lang)}" }
            p { class: "project-org",
                IconView { icon: Icon::Building, size: 14 }
                "{project.org}"
            }
            p { class: "summary", "{project.summary.get(lang)}" }
            div { class: "tags",
                for tag in project.tags.iter() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
            button { class: "btn-link",
                "{EXPLORE_PROJECT.get(lang)}"
                IconView { icon: Icon::ArrowRight, size: 18 }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NewsCardProps {
    item: NewsItem,
}

#[component]
pub fn NewsCard(props: NewsCardProps) -> Element {
    let state = use_page_state();
    let lang = state.read().language;
    let read_more = state.read().translation().read_more;
    let item = props.item;

    rsx! {
        div { class: "card news-card",
            div { class: "news-date",
                div { class: "pulse" }
                "{item.date}"
            }
            h4 { "{item.title.get(lang)}" }
            p { "{item.excerpt.get(lang)}" }
            button { class: "btn-link",
                "{read_more}"
                IconView { icon: Icon::ChevronRight, size: 16 }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AudienceCardProps {
    audience: Audience,
}

#[component]
pub fn AudienceCard(props: AudienceCardProps) -> Element {
    let state = use_page_state();
    let lang = state.read().language;
    let t = state.read().translation();
    let audience = props.audience;

    rsx! {
        div { class: "card card-xl audience-card",
            div { class: "icon-tile",
                IconView { icon: audience.icon(), size: 48 }
            }
            h4 { "{audience.title(t)}" }
            ul { class: "check-list",
                for item in audience.items() {
                    li { key: "{item.en}",
                        div { class: "dot" }
                        "{item.get(lang)}"
                    }
                }
            }
            button { class: "btn-link",
                "{GET_INFO.get(lang)}"
                IconView { icon: Icon::ArrowRight, size: 16 }
            }
        }
    }
}
