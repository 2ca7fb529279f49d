//! Hardcoded page content that is selected inline by language.

use crate::common::Localized;
use crate::common::i18n::Translation;
use crate::common::icons::Icon;

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?q=80&w=1200&auto=format&fit=crop";

pub const GET_INVOLVED: Localized = Localized::new("KATILIM SAĞLA", "GET INVOLVED");
pub const EXPLORE_PROJECT: Localized = Localized::new("PROJEYİ İNCELE", "EXPLORE PROJECT");
pub const GET_INFO: Localized = Localized::new("BİLGİ AL", "GET INFO");

pub const APPROACH_TITLE: Localized =
    Localized::new("Multidisipliner Yaklaşım", "Multidisciplinary Approach");
pub const APPROACH_DESC: Localized = Localized::new(
    "Mühendislik, Sosyal Bilimler ve İşletme bir arada.",
    "Engineering, Social Sciences, and Business combined.",
);

pub const THEMATIC_SUBTITLE: Localized = Localized::new(
    "Sürdürülebilir bir dünya için odaklandığımız temel uzmanlık alanlarımız.",
    "Core areas of expertise we focus on for a sustainable world.",
);
pub const PARTNERS_SUBTITLE: Localized = Localized::new(
    "Güçlerimizi birleştirdiğimiz kurumsal ve akademik paydaşlarımız.",
    "Our institutional and academic stakeholders with whom we join forces.",
);

pub const CONTACT_BANNER: Localized = Localized::new(
    "Geleceği Beraber Tasarlayalım",
    "Let's Design the Future Together",
);

pub const FOOTER_MISSION: Localized = Localized::new(
    "Özyeğin Üniversitesi bünyesinde toplumsal fayda için yapay zeka çözümleri geliştiren araştırma ve etkileşim merkezi.",
    "Research and interaction center within Özyeğin University developing AI solutions for social benefit.",
);
pub const RIGHTS_RESERVED: Localized =
    Localized::new("TÜM HAKLARI SAKLIDIR.", "ALL RIGHTS RESERVED.");
pub const COPYRIGHT: &str = "© 2025 ÖZYEĞİN UNIVERSITY.";

pub const PARTNERS: [&str; 4] = ["ÖZYEĞİN UNIVERSITY", "TÜBİTAK", "EUROPEAN UNION", "İBB AKOM"];

// placeholder outbound links in the footer
pub const CONNECT_LINKS: [(Icon, &str); 2] = [(Icon::Globe, "#"), (Icon::ExternalLink, "#")];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewsItem {
    pub title: Localized,
    pub date: &'static str,
    pub excerpt: Localized,
}

pub const NEWS: [NewsItem; 3] = [
    NewsItem {
        title: Localized::new(
            "AIxImpact, Sürdürülebilirlik Forumu'na ev sahipliği yaptı",
            "AIxImpact hosted the Sustainability Forum",
        ),
        date: "12 MART 2025",
        excerpt: Localized::new(
            "Üniversite ve sanayi ortaklarını bir araya getiren forumda yapay zekanın yeşil dönüşümdeki rolü tartışıldı.",
            "The role of AI in green transformation was discussed at the forum, bringing together university and industry partners.",
        ),
    },
    NewsItem {
        title: Localized::new(
            "Yenişehir Projesi AB Fonu Desteği Aldı",
            "Yenişehir Project Received EU Grant",
        ),
        date: "05 ŞUBAT 2025",
        excerpt: Localized::new(
            "İklim dirençli tarım çalışmalarımız, Avrupa Birliği tarafından stratejik öneme sahip olarak tanımlandı.",
            "Our climate-resilient agriculture work was identified as strategically important by the European Union.",
        ),
    },
    NewsItem {
        title: Localized::new(
            "Yapay Zeka ve Etik Çalıştay Serisi Başlıyor",
            "AI and Ethics Workshop Series Begins",
        ),
        date: "20 OCAK 2025",
        excerpt: Localized::new(
            "Sosyal etki projelerinde veri gizliliği ve adalet odaklı yeni bir eğitim serisi duyuruldu.",
            "A new training series focused on data privacy and justice in social impact projects has been announced.",
        ),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: Localized,
    pub period: &'static str,
    pub org: &'static str,
    pub summary: Localized,
    pub icon: Icon,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: Localized::new(
            "Yenişehir İklim Dayanıklılığı",
            "Yenişehir Climate Resilience",
        ),
        period: "2024–2026",
        org: "EU-Türkiye Climate Grant",
        summary: Localized::new(
            "Yenişehir'de yürütülen bu proje, iklim değişikliğine uyumlu, çevresel olarak sürdürülebilir ve üretken tarım sistemlerinin yapay zeka ile güçlendirilmesini hedeflemektedir.",
            "This project aims to strengthen climate-compatible, environmentally sustainable, and productive agricultural systems in Yenişehir using AI technology.",
        ),
        icon: Icon::Sprout,
        tags: &["Agriculture", "Climate", "AI", "EU-Project"],
    },
    Project {
        title: Localized::new(
            "Afet Sonrası Drone Hasar Tespiti",
            "Post-Disaster Drone Damage Detection",
        ),
        period: "2023–2025",
        org: "TÜBİTAK 1001 / İBB AKOM",
        summary: Localized::new(
            "Büyük ölçekli afetlerde hızlı ve etkili hasar tespiti yapılmasını sağlamak amacıyla geliştirilen çok aşamalı bir drone yönlendirme ve görüntü işleme sistemidir.",
            "A multi-stage drone guidance and image processing system developed to ensure fast and effective damage detection in large-scale disasters.",
        ),
        icon: Icon::Activity,
        tags: &["Disaster", "Drones", "Computer Vision", "Safety"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThematicArea {
    AgriFood,
    Crises,
    Sdg,
}

impl ThematicArea {
    pub fn all() -> [Self; 3] {
        [Self::AgriFood, Self::Crises, Self::Sdg]
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::AgriFood => Icon::Sprout,
            Self::Crises => Icon::Activity,
            Self::Sdg => Icon::Target,
        }
    }

    // css modifier for the icon tile
    pub fn tone(self) -> &'static str {
        match self {
            Self::AgriFood => "tone-emerald",
            Self::Crises => "tone-rose",
            Self::Sdg => "tone-blue",
        }
    }

    pub fn featured(self) -> bool {
        self == Self::Crises
    }

    pub fn title(self, t: &Translation) -> &'static str {
        match self {
            Self::AgriFood => t.agri_title,
            Self::Crises => t.crises_title,
            Self::Sdg => t.sdg_title,
        }
    }

    pub fn description(self, t: &Translation) -> &'static str {
        match self {
            Self::AgriFood => t.agri_desc,
            Self::Crises => t.crises_desc,
            Self::Sdg => t.sdg_desc,
        }
    }

    pub fn focus(self) -> [Localized; 3] {
        match self {
            Self::AgriFood => [
                Localized::new("Akıllı Sulama", "Smart Irrigation"),
                Localized::new("Hasat Tahmini", "Harvest Prediction"),
                Localized::new("Lojistik Optimizasyon", "Logistic Optimization"),
            ],
            Self::Crises => [
                Localized::new("Erken Uyarı Sistemleri", "Early Warning Systems"),
                Localized::new("Acil Durum Yönetimi", "Emergency Management"),
                Localized::new("Hasar Tespit Modelleri", "Damage Assessment Models"),
            ],
            Self::Sdg => [
                Localized::new("İklim Eylemi (SDG 13)", "Climate Action (SDG 13)"),
                Localized::new("Nitelikli Eğitim (SDG 4)", "Quality Education (SDG 4)"),
                Localized::new("Eşitsizliklerin Azaltılması", "Reduced Inequalities"),
            ],
        }
    }
}

/// Who the contact cards address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Audience {
    Researcher,
    Public,
    Funding,
}

impl Audience {
    pub fn all() -> [Self; 3] {
        [Self::Researcher, Self::Public, Self::Funding]
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Researcher => Icon::Users,
            Self::Public => Icon::Globe,
            Self::Funding => Icon::Target,
        }
    }

    pub fn title(self, t: &Translation) -> &'static str {
        match self {
            Self::Researcher => t.researcher_cta,
            Self::Public => t.public_cta,
            Self::Funding => t.funding_cta,
        }
    }

    pub fn items(self) -> [Localized; 3] {
        match self {
            Self::Researcher => [
                Localized::new("Fikirlerinizi Paylaşın", "Share Ideas"),
                Localized::new("Projelerinizi Entegre Edin", "Integrate Projects"),
                Localized::new("Asistanlık Başvurusu", "Apply for Assistantship"),
            ],
            Self::Public => [
                Localized::new("Veri Temelli Çözümler", "Data-Driven Solutions"),
                Localized::new("Saha İş Birlikleri", "Field Collaborations"),
                Localized::new("Kurumsal Ortaklık", "Corporate Partnership"),
            ],
            Self::Funding => [
                Localized::new("Projelere Destek Verin", "Support Projects"),
                Localized::new("Fon ve Bağış Yönetimi", "Fund Management"),
                Localized::new("Yeni Çağrılara Katılın", "Join New Calls"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::common::Language;
    use crate::common::i18n::translations;

    fn assert_filled(l: Localized) {
        for lang in Language::all() {
            assert!(!l.get(lang).trim().is_empty(), "{l:?} is blank in {lang}");
        }
    }

    #[test]
    fn news_items_are_filled_in_both_languages() {
        assert_eq!(NEWS.len(), 3);
        for item in NEWS {
            assert_filled(item.title);
            assert_filled(item.excerpt);
            assert!(!item.date.is_empty());
        }
    }

    #[test]
    fn news_titles_are_translated() {
        for item in NEWS {
            assert_ne!(item.title.tr, item.title.en);
        }
    }

    #[test]
    fn projects_are_filled() {
        for project in PROJECTS {
            assert_filled(project.title);
            assert_filled(project.summary);
            assert!(!project.tags.is_empty());
        }
    }

    #[test]
    fn exactly_one_featured_area() {
        let featured: Vec<_> = ThematicArea::all()
            .into_iter()
            .filter(|a| a.featured())
            .collect();
        assert_eq!(featured, vec![ThematicArea::Crises]);
    }

    #[test]
    fn area_and_audience_copy_resolves() {
        for lang in Language::all() {
            let t = translations(lang);
            for area in ThematicArea::all() {
                assert!(!area.title(t).is_empty());
                assert!(!area.description(t).is_empty());
                area.focus().into_iter().for_each(assert_filled);
            }
            for audience in Audience::all() {
                assert!(!audience.title(t).is_empty());
                audience.items().into_iter().for_each(assert_filled);
            }
        }
    }
}
