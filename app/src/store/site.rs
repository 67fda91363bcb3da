use serde::{Deserialize, Serialize};

use crate::dock::{DockConfig, DockLink};

/// Everything the landing page shows.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Site {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub now: Option<String>,
    #[serde(default)]
    pub previously: Option<String>,
    pub profile: Profile,
    #[serde(default)]
    pub socials: Vec<Social>,
    #[serde(default)]
    pub pitch: Option<Pitch>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub dock: DockSection,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Social {
    pub name: String,
    pub href: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Pitch {
    pub heading: String,
    pub body: String,
    #[serde(default)]
    pub call_to_action: Option<Social>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct DockSection {
    #[serde(flatten)]
    pub config: DockConfig,
    #[serde(default)]
    pub links: Vec<DockLink>,
}

impl Site {
    /// Returns why this content can't be rendered, if it can't.
    pub fn validate(&self) -> Result<(), String> {
        self.dock
            .config
            .validate()
            .map_err(|reason| format!("dock: {}", reason))?;
        let links = self
            .dock
            .links
            .iter()
            .map(|link| (link.name.as_str(), link.href.as_str()));
        let socials = self
            .socials
            .iter()
            .map(|social| (social.name.as_str(), social.href.as_str()));
        for (name, href) in links.chain(socials) {
            if href.trim().is_empty() {
                return Err(format!("link `{}' has no href", name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site {
            title: String::from("Site"),
            description: String::new(),
            headline: String::from("Hello"),
            tagline: String::new(),
            now: None,
            previously: None,
            profile: Profile {
                name: String::from("Someone"),
                role: String::from("Programmer"),
                avatar: None,
            },
            socials: vec![Social {
                name: String::from("GitHub"),
                href: String::from("https://github.com/someone"),
            }],
            pitch: None,
            stats: vec![],
            dock: DockSection::default(),
        }
    }

    #[test]
    fn valid() {
        assert_eq!(Ok(()), site().validate());
    }

    #[test]
    fn social_without_href() {
        let mut site = site();
        site.socials[0].href = String::new();
        assert_eq!(Err(String::from("link `GitHub' has no href")), site.validate());
    }

    #[test]
    fn dock_errors_are_prefixed() {
        let mut site = site();
        site.dock.config.distance = 0.0;
        let reason = site.validate().unwrap_err();
        assert!(reason.starts_with("dock: "), "{reason}");
    }
}
