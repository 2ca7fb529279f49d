use constcat::concat;

mod components;
mod page;
mod variables;

pub use components::BASE_COMPONENTS;
pub use page::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// Everything the page needs, in cascade order
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

::selection {
  background-color: var(--primary);
  color: #FFFFFF;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    PAGE_STYLES,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_contains_both_themes() {
        assert!(SITE_STYLES.contains(":root {"));
        assert!(SITE_STYLES.contains(":root.dark {"));
    }

    #[test]
    fn bundle_keeps_cascade_order() {
        let vars = SITE_STYLES.find("--primary:").unwrap();
        let nav = SITE_STYLES.find(".site-nav {").unwrap();
        assert!(vars < nav);
    }

    #[test]
    fn mobile_overlay_only_shows_on_small_screens() {
        let overlay = SITE_STYLES.find(".mobile-menu {").unwrap();
        let media = SITE_STYLES.find("@media (max-width: 768px)").unwrap();
        assert!(overlay < media);

        let base = &SITE_STYLES[overlay..];
        let base = &base[..base.find('}').unwrap()];
        assert!(base.contains("display: none;"));

        let small = &SITE_STYLES[media..];
        assert!(small.contains(".mobile-menu { display: block; }"));
        assert!(small.contains(".menu-btn { display: inline-flex; }"));
    }
}
