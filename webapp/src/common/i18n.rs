//! Translation tables for the two supported languages.
//!
//! Every key is a struct field, so a table that leaves one out does not
//! compile. Copy that only appears once on the page and is not shared
//! between sections lives next to its content in `crate::content` instead.

use serde::Serialize;

use crate::common::Language;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub nav_about: &'static str,
    pub nav_thematic: &'static str,
    pub nav_projects: &'static str,
    pub nav_news: &'static str,
    pub nav_contact: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub about_title: &'static str,
    pub about_desc1: &'static str,
    pub about_desc2: &'static str,
    pub about_desc3: &'static str,
    pub thematic_title: &'static str,
    pub agri_title: &'static str,
    pub agri_desc: &'static str,
    pub crises_title: &'static str,
    pub crises_desc: &'static str,
    pub sdg_title: &'static str,
    pub sdg_desc: &'static str,
    pub projects_title: &'static str,
    pub news_title: &'static str,
    pub partners_title: &'static str,
    pub contact_title: &'static str,
    pub contact_desc: &'static str,
    pub researcher_cta: &'static str,
    pub public_cta: &'static str,
    pub funding_cta: &'static str,
    pub read_more: &'static str,
}

pub const TR: Translation = Translation {
    nav_about: "Hakkımızda",
    nav_thematic: "Tematik Alanlar",
    nav_projects: "Projeler",
    nav_news: "Haberler",
    nav_contact: "İletişim",
    hero_title: "AIxImpact | Toplumsal Fayda için Yapay Zeka",
    hero_subtitle: "Özyeğin Üniversitesi Stratejik Girişimi",
    about_title: "Toplumsal Etki için Yapay Zeka",
    about_desc1: "AIxImpact, yapay zeka teknolojilerini toplumun en acil sorunlarına çözüm üretmek için kullanan disiplinlerarası bir araştırma ve etkileşim girişimidir.",
    about_desc2: "Akademisyenleri, kamu kurumlarını, sivil toplumu ve sanayiyi bir araya getirerek veriye dayalı, etik ve sürdürülebilir çözümler tasarlıyoruz.",
    about_desc3: "Araştırmalarımızı sahaya taşıyarak iklim, afet ve kalkınma alanlarında ölçülebilir fayda üretmeyi hedefliyoruz.",
    thematic_title: "Tematik Alanlar",
    agri_title: "AI ile Tarım ve Gıda",
    agri_desc: "İklim değişikliğine dayanıklı, verimli ve sürdürülebilir tarım sistemleri için akıllı karar destek araçları geliştiriyoruz.",
    crises_title: "AI ile Kriz Yönetimi",
    crises_desc: "Afet ve acil durumlarda hızlı müdahaleyi mümkün kılan erken uyarı, hasar tespiti ve koordinasyon modelleri üretiyoruz.",
    sdg_title: "AI ile Sürdürülebilir Kalkınma",
    sdg_desc: "Birleşmiş Milletler Sürdürülebilir Kalkınma Amaçları doğrultusunda eşitlikçi ve kapsayıcı çözümler tasarlıyoruz.",
    projects_title: "Öne Çıkan Projeler",
    news_title: "Haberler ve Duyurular",
    partners_title: "Paydaşlarımız",
    contact_title: "Bize Katılın",
    contact_desc: "Araştırmacı, kamu kurumu ya da destekçi olarak toplumsal etki yolculuğumuzun bir parçası olun.",
    researcher_cta: "Araştırmacılar İçin",
    public_cta: "Kamu ve Sivil Toplum İçin",
    funding_cta: "Destekçiler İçin",
    read_more: "Devamını Oku",
};

pub const EN: Translation = Translation {
    nav_about: "About",
    nav_thematic: "Thematic Areas",
    nav_projects: "Projects",
    nav_news: "News",
    nav_contact: "Contact",
    hero_title: "AIxImpact | AI for Social Impact",
    hero_subtitle: "Özyeğin University Strategic Initiative",
    about_title: "AI for Social Impact",
    about_desc1: "AIxImpact is an interdisciplinary research and engagement initiative that applies artificial intelligence to society's most pressing problems.",
    about_desc2: "We bring together academia, public institutions, civil society and industry to design data-driven, ethical and sustainable solutions.",
    about_desc3: "By taking our research into the field, we aim to create measurable benefit in climate, disaster and development.",
    thematic_title: "Thematic Areas",
    agri_title: "AI for Agri-Food",
    agri_desc: "We build intelligent decision support tools for climate-resilient, productive and sustainable agricultural systems.",
    crises_title: "AI for Crisis Management",
    crises_desc: "We develop early warning, damage assessment and coordination models that enable rapid response in disasters and emergencies.",
    sdg_title: "AI for Sustainable Development",
    sdg_desc: "We design equitable and inclusive solutions aligned with the United Nations Sustainable Development Goals.",
    projects_title: "Featured Projects",
    news_title: "News & Announcements",
    partners_title: "Our Partners",
    contact_title: "Join Us",
    contact_desc: "Become part of our social impact journey as a researcher, a public institution or a supporter.",
    researcher_cta: "For Researchers",
    public_cta: "For Public & Civil Society",
    funding_cta: "For Supporters",
    read_more: "Read More",
};

pub fn translations(lang: Language) -> &'static Translation {
    match lang {
        Language::Tr => &TR,
        Language::En => &EN,
    }
}

/// Splits a thematic title into its leading `AI` mark and the rest, so the
/// mark can be styled separately. Titles without the mark are returned whole.
pub fn split_ai_mark(title: &str) -> (Option<&str>, &str) {
    match title.strip_prefix("AI") {
        Some(rest) => (Some("AI"), rest),
        None => (None, title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::Value;

    const KEYS: [&str; 27] = [
        "nav_about",
        "nav_thematic",
        "nav_projects",
        "nav_news",
        "nav_contact",
        "hero_title",
        "hero_subtitle",
        "about_title",
        "about_desc1",
        "about_desc2",
        "about_desc3",
        "thematic_title",
        "agri_title",
        "agri_desc",
        "crises_title",
        "crises_desc",
        "sdg_title",
        "sdg_desc",
        "projects_title",
        "news_title",
        "partners_title",
        "contact_title",
        "contact_desc",
        "researcher_cta",
        "public_cta",
        "funding_cta",
        "read_more",
    ];

    fn as_map(t: &Translation) -> serde_json::Map<String, Value> {
        match serde_json::to_value(t) {
            Ok(Value::Object(map)) => map,
            other => panic!("translation did not serialize to an object: {other:?}"),
        }
    }

    #[test]
    fn every_table_has_exactly_the_key_set() {
        let mut expected: Vec<&str> = KEYS.to_vec();
        expected.sort_unstable();

        for lang in Language::all() {
            let map = as_map(translations(lang));
            let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(keys, expected, "key set mismatch for {lang}");
        }
    }

    #[test]
    fn no_value_is_blank() {
        for lang in Language::all() {
            for (key, value) in as_map(translations(lang)) {
                let text = value.as_str().unwrap_or_default();
                assert!(!text.trim().is_empty(), "{lang}.{key} is blank");
            }
        }
    }

    #[test]
    fn navigation_labels_differ_between_languages() {
        let tr = as_map(&TR);
        let en = as_map(&EN);
        for key in KEYS.iter().filter(|k| k.starts_with("nav_")) {
            assert_ne!(tr[*key], en[*key], "{key} is not translated");
        }
    }

    #[test]
    fn thematic_titles_carry_the_ai_mark() {
        for lang in Language::all() {
            let t = translations(lang);
            for title in [t.agri_title, t.crises_title, t.sdg_title] {
                let (mark, rest) = split_ai_mark(title);
                assert_eq!(mark, Some("AI"), "{title}");
                assert!(!rest.trim().is_empty());
            }
        }
    }

    #[test]
    fn split_without_mark_keeps_title() {
        assert_eq!(split_ai_mark("Agri-Food"), (None, "Agri-Food"));
        assert_eq!(split_ai_mark("AI for X"), (Some("AI"), " for X"));
    }
}
