use crate::foundation::error::{LandkitError, LandkitResult};

/// Everything the landing page says and shows. Loaded from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageContent {
    pub meta: Meta,
    pub header: Header,
    pub hero: Hero,
    pub intro: Intro,
    pub ontology: Ontology,
    pub products: Products,
    pub ai: Ai,
    #[serde(default)]
    pub pain_points: Vec<PainPoint>,
    pub why: Why,
    #[serde(default)]
    pub cta: Option<Cta>,
    pub footer: Footer,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Meta {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogoSources {
    pub light: String,
    pub dark: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Header {
    #[serde(default)]
    pub logo_text: String,
    pub logo: LogoSources,
    pub nav: Vec<Link>,
    pub cta_text: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stat {
    pub number: String, // parsed as the counter target
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

impl Stat {
    pub fn target(&self) -> LandkitResult<u64> {
        self.number.trim().parse::<u64>().map_err(|_| {
            LandkitError::content(format!(
                "stat '{}' number '{}' is not a non-negative integer",
                self.label, self.number
            ))
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub image: Option<String>,
    pub headline: Vec<String>, // first line plain, optional second line accented
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// Copy for the pinned region: `line1` fades out while `line2` fades in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Intro {
    pub line1: String,
    pub line2: String,
    #[serde(default)]
    pub para: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IconLabel {
    pub label: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ontology {
    pub description: String,
    pub hierarchy: Vec<IconLabel>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub phase: String,
    pub icon: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Products {
    pub intro: String,
    pub items: Vec<Product>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ai {
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PainPoint {
    pub icon: String,
    pub title: String,
    pub solution: String,
}

/// A reason rendered as `<strong>strong</strong>text`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reason {
    pub strong: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Why {
    pub reasons: Vec<Reason>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cta {
    pub heading: String,
    #[serde(default)]
    pub sub: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FooterLinks {
    #[serde(default)]
    pub product: Vec<Link>,
    #[serde(default)]
    pub legal: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Footer {
    pub tagline: String,
    pub year: String,
    pub company: String,
    pub links: FooterLinks,
}

impl Footer {
    pub fn copyright(&self) -> String {
        format!("© {} {}. All rights reserved.", self.year, self.company)
    }
}

impl PageContent {
    pub fn from_json(s: &str) -> LandkitResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn validate(&self) -> LandkitResult<()> {
        if self.meta.title.trim().is_empty() {
            return Err(LandkitError::content("meta.title must be non-empty"));
        }
        match self.hero.headline.len() {
            1 | 2 => {}
            n => {
                return Err(LandkitError::content(format!(
                    "hero.headline must have 1 or 2 lines (got {n})"
                )));
            }
        }
        for stat in &self.hero.stats {
            stat.target()?;
        }

        let links = self
            .header
            .nav
            .iter()
            .chain(&self.footer.links.product)
            .chain(&self.footer.links.legal);
        for link in links {
            if link.label.trim().is_empty() {
                return Err(LandkitError::content(format!(
                    "link to '{}' has an empty label",
                    link.href
                )));
            }
            if link.href.trim().is_empty() {
                return Err(LandkitError::content(format!(
                    "link '{}' has an empty href",
                    link.label
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
