use log::error;
use serde::Deserialize;

use crate::components::icons::Icon;
use crate::error::ContentError;

const BUNDLED: &str = include_str!("../content/page.json");

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct PageContent {
    pub brand: Brand,
    pub nav_links: Vec<Link>,
    pub hero: HeroCopy,
    pub features: FeatureSection,
    pub showcase: Showcase,
    pub pricing: PricingSection,
    pub footer: FooterContent,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub suffix: String,
    /// Copyright holder.
    pub holder: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct HeroCopy {
    pub badge: String,
    pub headline: String,
    pub subline: String,
    pub description: String,
    pub primary_cta: String,
    pub demo_cta: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct FeatureSection {
    pub title: String,
    pub blurb: String,
    pub cards: Vec<Feature>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub accent: String,
    /// Spans two grid columns on wide screens.
    pub wide: bool,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct Showcase {
    pub title: String,
    pub highlight: String,
    pub image_alt: String,
    pub items: Vec<ShowcaseItem>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct ShowcaseItem {
    pub icon: Icon,
    pub title: String,
    pub text: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct PricingSection {
    pub title: String,
    pub blurb: String,
    pub tiers: Vec<Tier>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct Tier {
    pub title: String,
    pub price: String,
    pub features: Vec<String>,
    pub highlighted: bool,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct FooterContent {
    pub tagline: String,
    pub socials: Vec<SocialLink>,
    pub groups: Vec<LinkGroup>,
    pub newsletter: Newsletter,
    pub legal: Vec<Link>,
    pub credit: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct LinkGroup {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct Newsletter {
    pub title: String,
    pub blurb: String,
    pub placeholder: String,
    pub button: String,
}

impl PageContent {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bundled() -> Result<Self, ContentError> {
        Self::parse(BUNDLED)
    }

    /// Bundled content, or an empty page if it cannot be read.
    pub fn load() -> Self {
        match Self::bundled() {
            Ok(content) => content,
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }
}
