//! Marketing content rendered by the landing sections.

use crate::config;

pub const COMMUNITY_MOCKUP: &str = "https://focus-business.com/wp-content/uploads/2025/08/mockup-community.png";
const DASHBOARD_CAPTURE: &str = "https://focus-business.com/wp-content/uploads/2025/08/Capture-decran-2025-08-21-a-12.00.01-2.png";
const CARTA_SCREEN: &str = "https://focus-business.com/wp-content/uploads/2025/08/carta.png";
const GROUP_PHOTO: &str = "https://focus-business.com/wp-content/uploads/2025/06/group-image-4.webp";

/// Where a call to action sends the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Checkout,
    Community,
    ClientArea,
}

impl Destination {
    pub fn url(self) -> &'static str {
        match self {
            Destination::Checkout => config::get_checkout_url(),
            Destination::Community => config::get_community_url(),
            Destination::ClientArea => config::get_client_area_url(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub cta: &'static str,
    pub link: Destination,
}

pub static FEATURE_CARDS: [FeatureCard; 5] = [
    FeatureCard {
        id: "01",
        title: "D’un réseau engagé qui partage les mêmes ambitions",
        description: "Rejoignez des entrepreneurs et créateurs animés par la même énergie que vous. Échangez idées, retours d’expérience et opportunités pour progresser ensemble.",
        image: COMMUNITY_MOCKUP,
        cta: "Rejoindre le réseau",
        link: Destination::Checkout,
    },
    FeatureCard {
        id: "02",
        title: "De l’e-commerce, du branding, de l’IA et du digital",
        description: "Chaque semaine, nous partageons des stratégies concrètes, des astuces pratiques et des analyses actuelles pour booster vos projets en ligne.",
        image: DASHBOARD_CAPTURE,
        cta: "Accéder aux cours",
        link: Destination::Checkout,
    },
    FeatureCard {
        id: "03",
        title: "D’un accompagnement collectif pour progresser plus vite",
        description: "Vous n’êtes plus seul : la force du groupe vous permet d’avancer avec plus de clarté et de confiance. Les questions des autres enrichissent votre parcours.",
        image: CARTA_SCREEN,
        cta: "Progresser avec nous",
        link: Destination::Checkout,
    },
    FeatureCard {
        id: "04",
        title: "D’une communauté active accessible à tout moment",
        description: "Un espace privé disponible 24/7 pour discuter, poser vos questions et créer des connexions réelles avec des profils variés : débutants motivés, entrepreneurs confirmés, experts.",
        image: CARTA_SCREEN,
        cta: "Découvrir le salon",
        link: Destination::Community,
    },
    FeatureCard {
        id: "05",
        title: "D’outils et de ressources pour structurer vos projets",
        description: "Accédez à des modèles de business plans, checklists, templates et documents stratégiques pour mettre en place des actions concrètes immédiatement.",
        image: GROUP_PHOTO,
        cta: "Télécharger les outils",
        link: Destination::Checkout,
    },
];

/// One entry of the rotating showcase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static STEPS: [Step; 3] = [
    Step {
        id: "01",
        title: "Accès avec plateformes interactifs",
        description: "Astuces e-commerce, stratégies digitales, études de cas.",
        image: DASHBOARD_CAPTURE,
    },
    Step {
        id: "02",
        title: "Ressources exclusives",
        description: "Templates, checklists, documents prêts à l’emploi.",
        image: CARTA_SCREEN,
    },
    Step {
        id: "03",
        title: "Communauté privée",
        description: "Un espace pour avancer plus vite, ensemble.",
        image: GROUP_PHOTO,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Cart,
    Target,
    Cpu,
    Zap,
}

/// Footprint of a card in the three-column bento grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileSize {
    Large,
    Small,
    Wide,
}

impl TileSize {
    pub fn class(self) -> &'static str {
        match self {
            TileSize::Large => "tile-large",
            TileSize::Small => "tile-small",
            TileSize::Wide => "tile-wide",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: ThemeIcon,
    pub image: &'static str,
    pub details: &'static str,
    pub size: TileSize,
}

pub static THEMES: [Theme; 4] = [
    Theme {
        id: "ecommerce",
        title: "Ecommerce",
        icon: ThemeIcon::Cart,
        image: COMMUNITY_MOCKUP,
        details: "Maîtrisez le sourcing, la logistique et la conversion pour bâtir une boutique rentable dès le premier mois.",
        size: TileSize::Large,
    },
    Theme {
        id: "branding",
        title: "E-Branding",
        icon: ThemeIcon::Target,
        image: DASHBOARD_CAPTURE,
        details: "Créez une identité visuelle forte et un storytelling qui transforme vos visiteurs en ambassadeurs.",
        size: TileSize::Small,
    },
    Theme {
        id: "ia",
        title: "IA",
        icon: ThemeIcon::Cpu,
        image: CARTA_SCREEN,
        details: "Automatisez 80% de vos tâches répétitives grâce aux meilleurs outils d'IA.",
        size: TileSize::Small,
    },
    Theme {
        id: "automatisation",
        title: "Automatisation",
        icon: ThemeIcon::Zap,
        image: GROUP_PHOTO,
        details: "Connectez vos outils entre eux pour faire tourner votre business pendant que vous dormez.",
        size: TileSize::Wide,
    },
];

pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanFeature {
    pub text: &'static str,
    pub included: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    /// Monthly price in euros, as displayed.
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [PlanFeature],
    pub cta: &'static str,
    pub popular: bool,
    pub badge: &'static str,
}

impl Plan {
    pub fn destination(&self) -> Destination {
        if self.popular {
            Destination::Checkout
        } else {
            Destination::Community
        }
    }
}

pub static PLANS: [Plan; 2] = [
    Plan {
        name: "Discord Public",
        price: "0",
        description: "Pour découvrir l’ambiance.",
        features: &[
            PlanFeature { text: "Accès aux salons de discussion généraux", included: true },
            PlanFeature { text: "Réseautage basique", included: true },
            PlanFeature { text: "Accès aux stratégies & ressources", included: false },
            PlanFeature { text: "Lives & ateliers exclusifs", included: false },
        ],
        cta: "Rejoindre le Discord Public",
        popular: false,
        badge: "Gratuit",
    },
    Plan {
        name: "Focus Business Club",
        price: "9,90",
        description: "Pour ceux qui veulent des résultats.",
        features: &[
            PlanFeature { text: "Accès TOTAL aux salons privés", included: true },
            PlanFeature { text: "Ressources & templates inclus", included: true },
            PlanFeature { text: "Lives & Q&A hebdomadaires", included: true },
            PlanFeature { text: "Accès aux replays", included: true },
        ],
        cta: "Rejoindre Focus",
        popular: true,
        badge: "Groupe premium",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const MEDIA: &str = "https://focus-business.com/wp-content/uploads/";

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    #[test]
    fn identifiers_are_unique() {
        assert_unique(FEATURE_CARDS.iter().map(|c| c.id));
        assert_unique(STEPS.iter().map(|s| s.id));
        assert_unique(THEMES.iter().map(|t| t.id));
        assert_unique(PLANS.iter().map(|p| p.name));
    }

    #[test]
    fn community_card_links_to_community() {
        let card = FEATURE_CARDS.iter().find(|c| c.id == "04").unwrap();
        assert_eq!(card.link.url(), config::get_community_url());
        assert!(FEATURE_CARDS
            .iter()
            .filter(|c| c.id != "04")
            .all(|c| c.link == Destination::Checkout));
    }

    #[test]
    fn only_popular_plan_goes_to_checkout() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].destination(), Destination::Checkout);
        assert_eq!(PLANS[0].destination(), Destination::Community);
    }

    #[test]
    fn free_plan_lists_excluded_features() {
        assert!(PLANS[0].features.iter().any(|f| !f.included));
        assert!(PLANS[1].features.iter().all(|f| f.included));
    }

    #[test]
    fn every_image_is_hosted() {
        let images = FEATURE_CARDS
            .iter()
            .map(|c| c.image)
            .chain(STEPS.iter().map(|s| s.image))
            .chain(THEMES.iter().map(|t| t.image))
            .chain([COMMUNITY_MOCKUP]);
        for image in images {
            assert!(image.starts_with(MEDIA), "{image} is not a hosted upload");
        }
    }

    #[test]
    fn find_theme_by_id() {
        assert_eq!(find_theme("ecommerce").map(|t| t.title), Some("Ecommerce"));
        assert!(find_theme("unknown").is_none());
    }
}
