pub mod cards;
pub mod footer;
pub mod navigation;

use dioxus::prelude::*;

use crate::common::state::PageState;

/// The page state provided by `App`.
pub fn use_page_state() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::common::Language;
    use crate::common::i18n::translations;
    use crate::common::state::nav_links;
    use crate::components::footer::Footer;
    use crate::components::navigation::NavBar;

    #[derive(Clone, PartialEq, Props)]
    struct ChromeProps {
        language: Language,
        footer: bool,
    }

    // Provides the page state the way `App` does, with the overlay open so
    // the mobile list renders too.
    #[component]
    fn Chrome(props: ChromeProps) -> Element {
        use_context_provider(|| {
            Signal::new(PageState {
                language: props.language,
                menu_open: true,
                ..PageState::default()
            })
        });

        rsx! {
            if props.footer {
                Footer {}
            } else {
                NavBar {}
            }
        }
    }

    fn render(language: Language, footer: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Chrome, ChromeProps { language, footer });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    // Text of every `nav-link` button, in document order
    fn nav_labels(html: &str) -> Vec<String> {
        html.split(r#"class="nav-link""#)
            .skip(1)
            .map(|rest| {
                let body = &rest[rest.find('>').map_or(0, |i| i + 1)..];
                let mut label = &body[..body.find("</button>").unwrap_or(body.len())];
                let mut text = String::new();
                while let Some(start) = label.find("<!--") {
                    text.push_str(&label[..start]);
                    let end = label[start..].find("-->").map_or(label.len(), |i| start + i + 3);
                    label = &label[end..];
                }
                text.push_str(label);
                text
            })
            .collect()
    }

    #[test]
    fn header_and_footer_render_the_same_links() {
        for lang in Language::all() {
            let expected: Vec<String> = nav_links(translations(lang))
                .iter()
                .map(|l| l.label.to_owned())
                .collect();

            let header = nav_labels(&render(lang, false));
            let footer = nav_labels(&render(lang, true));

            assert_eq!(footer, expected, "footer links in {lang}");
            // desktop row, then the open mobile overlay
            assert_eq!(header.len(), 2 * expected.len(), "header links in {lang}");
            for list in header.chunks(expected.len()) {
                assert_eq!(list, footer.as_slice(), "header links in {lang}");
            }
        }
    }

    #[test]
    fn rendered_links_switch_with_language() {
        let tr = nav_labels(&render(Language::Tr, true));
        let en = nav_labels(&render(Language::En, true));
        assert_eq!(tr[0], "Hakkımızda");
        assert_eq!(en[0], "About");
        assert!(tr.iter().zip(&en).all(|(a, b)| a != b));
    }
}
