use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub static AI_PROFILE: LazyLock<Profile> = LazyLock::new(|| bundled("ai.json"));
pub static SWE_PROFILE: LazyLock<Profile> = LazyLock::new(|| bundled("swe.json"));

#[derive(Embed)]
#[folder = "content"]
struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

impl Hero {
    /// Splits the title into its first word and the remainder, which the hero
    /// banner renders on separate lines.
    pub fn title_parts(&self) -> (&str, &str) {
        let title = self.title.trim();
        match title.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest.trim_start()),
            None => (title, ""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub text: String,
    pub hobbies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: u32,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateEntry {
    pub id: u32,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub link: String,
}

/// A skill with a 0..=100 proficiency. The range is not validated; values
/// outside it only affect how the bar is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: i32,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub hero: Hero,
    pub about: About,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certificates: Vec<CertificateEntry>,
    pub skills: Vec<SkillEntry>,
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("profile {0} is not bundled")]
    NotFound(String),
    #[error("couldn't parse profile {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_profile(file: &str) -> Result<Profile, ProfileError> {
    let content = Content::get(file).ok_or_else(|| ProfileError::NotFound(file.to_string()))?;
    serde_json::from_slice(&content.data).map_err(|source| ProfileError::Parse {
        file: file.to_string(),
        source,
    })
}

fn bundled(file: &str) -> Profile {
    load_profile(file).unwrap_or_else(|err| panic!("bundled profile is invalid: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_profiles_load() {
        for file in ["ai.json", "swe.json"] {
            let profile = load_profile(file).expect("bundled profile should parse");
            assert!(!profile.hero.title.is_empty());
            assert!(!profile.education.is_empty());
            assert!(!profile.experience.is_empty());
            assert!(!profile.projects.is_empty());
            assert!(!profile.certificates.is_empty());
            assert!(!profile.skills.is_empty());
        }
    }

    #[test]
    fn test_missing_profile() {
        let err = load_profile("nope.json").unwrap_err();
        assert!(matches!(err, ProfileError::NotFound(ref f) if f == "nope.json"));
        assert_eq!(err.to_string(), "profile nope.json is not bundled");
    }

    #[test]
    fn test_lists_keep_authored_order() {
        let ids = AI_PROFILE
            .projects
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(SWE_PROFILE.experience[0].role, "Lead Software Engineer");
        assert_eq!(SWE_PROFILE.experience[1].role, "Software Developer");
    }

    #[test]
    fn test_ids_unique_within_each_list() {
        for profile in [&*AI_PROFILE, &*SWE_PROFILE] {
            let mut ids = profile.projects.iter().map(|p| p.id).collect::<Vec<_>>();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), profile.projects.len());

            let mut ids = profile.certificates.iter().map(|c| c.id).collect::<Vec<_>>();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), profile.certificates.len());
        }
    }

    #[test]
    fn test_out_of_range_level_still_loads() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "hero": { "title": "X", "subtitle": "", "description": "" },
            "about": { "text": "", "hobbies": [] },
            "education": [],
            "experience": [],
            "projects": [],
            "certificates": [],
            "skills": [
                { "name": "Negative", "level": -5, "category": "Misc" },
                { "name": "Huge", "level": 300, "category": "Misc" }
            ]
        }))
        .expect("levels outside 0..=100 should parse");
        assert_eq!(profile.skills[0].level, -5);
        assert_eq!(profile.skills[1].level, 300);
    }

    #[test]
    fn test_title_parts() {
        assert_eq!(AI_PROFILE.hero.title_parts(), ("GENERATIVE", "AI ENGINEER"));
        let hero = Hero {
            title: "  SOLO ".to_string(),
            subtitle: String::new(),
            description: String::new(),
        };
        assert_eq!(hero.title_parts(), ("SOLO", ""));
    }
}
