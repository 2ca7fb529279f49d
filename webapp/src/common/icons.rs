use dioxus::prelude::*;

/// Every icon the page uses. Path data follows the 24x24 stroked outline
/// set, with circles and rects written out as paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Activity,
    ArrowRight,
    BookOpen,
    Building,
    Calendar,
    ChevronRight,
    Close,
    Cpu,
    ExternalLink,
    Globe,
    Mail,
    Menu,
    Moon,
    Sprout,
    Sun,
    Target,
    Users,
}

impl Icon {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Self::Building => &[
                "M6 2h12a2 2 0 0 1 2 2v18H4V4a2 2 0 0 1 2-2z",
                "M9 22v-4h6v4",
                "M8 6h.01",
                "M12 6h.01",
                "M16 6h.01",
                "M8 10h.01",
                "M12 10h.01",
                "M16 10h.01",
                "M8 14h.01",
                "M12 14h.01",
                "M16 14h.01",
            ],
            Self::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Self::ChevronRight => &["m9 18 6-6-6-6"],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
            Self::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M15 2v2",
                "M15 20v2",
                "M2 15h2",
                "M2 9h2",
                "M20 15h2",
                "M20 9h2",
                "M9 2v2",
                "M9 20v2",
            ],
            Self::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Self::Globe => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Self::Sprout => &[
                "M7 20h10",
                "M10 20c5.5-2.5.8-6.4 3-10",
                "M9.5 9.4c1.1.8 1.8 2.2 2.3 3.7-2 .4-3.5.4-4.8-.3-1.2-.6-2.3-1.9-3-4.2 2.8-.5 4.4 0 5.5.8z",
                "M14.1 6a7 7 0 0 0-1.1 4c1.9-.1 3.3-.6 4.3-1.4 1-1 1.6-2.3 1.7-4.6-2.7.1-4 1-4.9 2z",
            ],
            Self::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::Target => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
                "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
        }
    }
}

#[component]
pub fn IconView(icon: Icon, #[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for (idx, d) in icon.paths().iter().enumerate() {
                path { key: "{idx}", d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_path_data() {
        let all = [
            Icon::Activity,
            Icon::ArrowRight,
            Icon::BookOpen,
            Icon::Building,
            Icon::Calendar,
            Icon::ChevronRight,
            Icon::Close,
            Icon::Cpu,
            Icon::ExternalLink,
            Icon::Globe,
            Icon::Mail,
            Icon::Menu,
            Icon::Moon,
            Icon::Sprout,
            Icon::Sun,
            Icon::Target,
            Icon::Users,
        ];
        for icon in all {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{icon:?}");
            assert!(
                paths.iter().all(|d| d.starts_with(['M', 'm'])),
                "{icon:?} has a path that does not start with a move"
            );
        }
    }
}
