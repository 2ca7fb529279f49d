use tracing::Level;

use crate::common::{Language, Theme};

/// Compile-time site settings.
///
/// The page has no runtime configuration surface, so everything that would
/// otherwise live in a config file is pinned here.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub default_language: Language,
    pub default_theme: Theme,

    // pixels subtracted from an anchor's position so the fixed header
    // does not cover the section heading
    pub header_offset: f64,

    // vertical offset past which the navigation bar switches style,
    // exclusive
    pub scroll_threshold: f64,

    pub contact_email: &'static str,
    pub log_level: Level,
}

pub const SITE: SiteConfig = SiteConfig {
    default_language: Language::Tr,
    default_theme: Theme::Dark,
    header_offset: 80.0,
    scroll_threshold: 50.0,
    contact_email: "aiximpact@ozyegin.edu.tr",
    log_level: Level::DEBUG,
};

impl SiteConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_link_targets_contact_address() {
        assert_eq!(SITE.mailto(), "mailto:aiximpact@ozyegin.edu.tr");
    }

    #[test]
    fn defaults_match_first_load() {
        assert_eq!(SITE.default_language, Language::Tr);
        assert_eq!(SITE.default_theme, Theme::Dark);
        assert_eq!(SITE.header_offset, 80.0);
        assert_eq!(SITE.scroll_threshold, 50.0);
    }
}
