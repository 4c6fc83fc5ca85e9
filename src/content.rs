use std::collections::HashSet;

use serde::Deserialize;

use crate::config::{BOTTOM_SECTION, STAGGER_STEP_MS};
use crate::error::ContentError;

const SITE_CONTENT_JSON: &str = include_str!("../content/site.json");
const ABOUT_INTEREST_COUNT: usize = 4;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    /// Element id targeted by the anchor, `"about"` for `"#about"`.
    pub fn section_id(&self) -> &str {
        self.href.strip_prefix('#').unwrap_or(&self.href)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SkillRecord {
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct InterestRecord {
    pub icon: String,
    pub title: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub image: String,
    pub image_alt: String,
    pub linkedin: String,
    pub github: String,
    pub email_compose: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub tagline: String,
    pub stack: String,
    pub summary: String,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub profile: Profile,
    pub nav_links: Vec<NavLink>,
    pub technical_skills: Vec<SkillRecord>,
    pub interests: Vec<InterestRecord>,
    pub project: Project,
}

impl SiteContent {
    /// Content compiled into the binary from `content/site.json`.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(SITE_CONTENT_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let Some(last) = self.nav_links.last() else {
            return Err(ContentError::NoNavLinks);
        };

        let mut seen = HashSet::new();
        for link in &self.nav_links {
            if !link.href.starts_with('#') || link.section_id().is_empty() {
                return Err(ContentError::InvalidHref {
                    href: link.href.clone(),
                });
            }
            if !seen.insert(link.section_id()) {
                return Err(ContentError::DuplicateSection {
                    id: link.section_id().to_string(),
                });
            }
        }

        if last.section_id() != BOTTOM_SECTION {
            return Err(ContentError::BottomSectionMismatch {
                expected: BOTTOM_SECTION.to_string(),
                found: last.section_id().to_string(),
            });
        }

        Ok(())
    }

    pub fn about_interests(&self) -> &[InterestRecord] {
        let count = self.interests.len().min(ABOUT_INTEREST_COUNT);
        &self.interests[..count]
    }
}

/// Transition delay of the technical skill card at `index`.
pub fn skill_card_delay_ms(index: usize) -> usize {
    (index + 1) * STAGGER_STEP_MS
}

/// Transition delay of the interest card at `index`, queued after every
/// technical card and the interstitial paragraph.
pub fn interest_card_delay_ms(technical_count: usize, index: usize) -> usize {
    (technical_count + index + 2) * STAGGER_STEP_MS
}

pub fn interstitial_delay_ms(technical_count: usize) -> usize {
    technical_count * STAGGER_STEP_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_with_nav(nav: &str) -> String {
        format!(
            r##"{{
                "profile": {{
                    "name": "N", "tagline": "T", "image": "/i.jpeg", "imageAlt": "A",
                    "linkedin": "https://l", "github": "https://g", "emailCompose": "https://m"
                }},
                "navLinks": {nav},
                "technicalSkills": [],
                "interests": [],
                "project": {{ "name": "P", "tagline": "T", "stack": "S", "summary": "S", "features": [] }}
            }}"##
        )
    }

    #[test]
    fn embedded_content_parses_with_five_sections_ending_at_contact() {
        let content = SiteContent::embedded().expect("embedded content is valid");
        let ids: Vec<&str> = content.nav_links.iter().map(NavLink::section_id).collect();

        assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
        assert_eq!(content.technical_skills.len(), 6);
        assert_eq!(content.interests.len(), 6);
        assert_eq!(content.project.features.len(), 7);
    }

    #[test]
    fn interests_have_no_level_and_skills_do() {
        let content = SiteContent::embedded().expect("embedded content is valid");
        assert!(content.technical_skills.iter().all(|skill| skill.level.is_some()));
        assert_eq!(content.about_interests().len(), 4);
        assert_eq!(content.about_interests()[0].title, "Artificial Intelligence & Machine Learning");
    }

    #[test]
    fn section_id_strips_anchor_prefix() {
        let link = NavLink {
            href: "#projects".to_string(),
            label: "Projects".to_string(),
        };
        assert_eq!(link.section_id(), "projects");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = SiteContent::from_json("{ \"profile\": ");
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn empty_navigation_is_rejected() {
        let result = SiteContent::from_json(&content_with_nav("[]"));
        assert!(matches!(result, Err(ContentError::NoNavLinks)));
    }

    #[test]
    fn external_href_is_rejected() {
        let raw = content_with_nav(
            r##"[{ "href": "https://example.com", "label": "Out" }, { "href": "#contact", "label": "Contact" }]"##,
        );
        let result = SiteContent::from_json(&raw);
        assert!(matches!(result, Err(ContentError::InvalidHref { href }) if href == "https://example.com"));
    }

    #[test]
    fn duplicate_section_is_rejected() {
        let raw = content_with_nav(
            r##"[{ "href": "#contact", "label": "A" }, { "href": "#contact", "label": "B" }]"##,
        );
        let result = SiteContent::from_json(&raw);
        assert!(matches!(result, Err(ContentError::DuplicateSection { id }) if id == "contact"));
    }

    #[test]
    fn navigation_must_end_at_contact() {
        let raw = content_with_nav(
            r##"[{ "href": "#contact", "label": "Contact" }, { "href": "#home", "label": "Home" }]"##,
        );
        let result = SiteContent::from_json(&raw);
        assert!(matches!(
            result,
            Err(ContentError::BottomSectionMismatch { found, .. }) if found == "home"
        ));
    }

    #[test]
    fn card_delays_are_staggered_after_technical_cards() {
        assert_eq!(skill_card_delay_ms(0), 50);
        assert_eq!(skill_card_delay_ms(5), 300);
        assert_eq!(interstitial_delay_ms(6), 300);
        assert_eq!(interest_card_delay_ms(6, 0), 400);
        assert_eq!(interest_card_delay_ms(6, 5), 650);
    }
}
