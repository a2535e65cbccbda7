use rust_embed::Embed;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::from_assets(PORTFOLIO_FILE));

const PORTFOLIO_FILE: &str = "portfolio.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

impl Profile {
    pub fn page_title(&self) -> String {
        format!("{} | Portfolio", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub outcome: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub dashboard_link: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub repository_link: Option<String>,
}

/// Action buttons a project card can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLinkKind {
    Dashboard,
    Repository,
}

impl ProjectLinkKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "View Dashboard",
            Self::Repository => "View on GitHub",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Dashboard => "project-link powerbi-link",
            Self::Repository => "project-link github-link",
        }
    }
}

impl ProjectEntry {
    /// The non-empty links on this project, dashboard first.
    pub fn links(&self) -> Vec<(ProjectLinkKind, String)> {
        [
            (ProjectLinkKind::Dashboard, &self.dashboard_link),
            (ProjectLinkKind::Repository, &self.repository_link),
        ]
        .into_iter()
        .filter_map(|(kind, link)| {
            link.as_ref()
                .filter(|l| !l.trim().is_empty())
                .map(|l| (kind, l.clone()))
        })
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub duration: String,
    #[serde(default)]
    pub modules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub label: String,
    /// A devicon class; skills without one render as plain text.
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub experience: Vec<WorkExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillCategory>,
    pub activities: Vec<ActivityEntry>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content file {file}: {reason}")]
    ParseError { file: String, reason: String },
}

impl Portfolio {
    pub fn from_assets(file: &str) -> Result<Self, ContentError> {
        let content = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
        Self::from_json(file, &content.data)
    }

    pub fn from_json(file: &str, data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::ParseError {
            file: file.to_string(),
            reason: e.to_string(),
        })
    }
}

/// The portfolio compiled into the binary, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    let loaded: &'static Result<Portfolio, ContentError> = &GLOBAL_PORTFOLIO;
    loaded.as_ref().map_err(Clone::clone)
}

/// Treats `""` (and whitespace) the same as a missing link.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(dashboard: &str, repository: &str) -> ProjectEntry {
        let json = format!(
            r#"{{
                "title": "Demo",
                "description": "d",
                "outcome": "o",
                "tags": ["a"],
                "dashboard_link": "{dashboard}",
                "repository_link": "{repository}"
            }}"#
        );
        serde_json::from_str(&json).expect("project should parse")
    }

    #[test]
    fn test_embedded_portfolio_parses() {
        let portfolio = portfolio().expect("embedded portfolio should parse");
        assert_eq!(portfolio.profile.name, "Pravesh Rana");
        assert_eq!(portfolio.experience.len(), 4);
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.education.len(), 2);
        assert_eq!(portfolio.skills.len(), 3);
        assert_eq!(portfolio.activities.len(), 3);
    }

    #[test]
    fn test_registry_keeps_declared_order() {
        let portfolio = portfolio().unwrap();
        let companies: Vec<&str> = portfolio
            .experience
            .iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(
            companies,
            vec![
                "Deloitte",
                "Outlier (Freelance)",
                "Shree Construction Company",
                "Emerzin Media"
            ]
        );
        assert_eq!(portfolio.projects[0].title, "US Flights Decision Support System");
        assert_eq!(portfolio.projects[3].title, "SAP ByDesign Implementation");
    }

    #[test]
    fn test_empty_links_are_absent() {
        let p = project("", "  ");
        assert_eq!(p.dashboard_link, None);
        assert_eq!(p.repository_link, None);
        assert!(p.links().is_empty());
    }

    #[test]
    fn test_blank_links_built_in_code_are_skipped() {
        let p = ProjectEntry {
            title: "t".to_string(),
            description: "d".to_string(),
            outcome: "o".to_string(),
            tags: vec![],
            dashboard_link: Some(String::new()),
            repository_link: Some(" ".to_string()),
        };
        assert!(p.links().is_empty());

        let p = ProjectEntry {
            repository_link: Some("https://github.com/example/repo".to_string()),
            ..p
        };
        let kinds: Vec<_> = p.links().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![ProjectLinkKind::Repository]);
    }

    #[test]
    fn test_page_title_from_profile() {
        let profile = &portfolio().unwrap().profile;
        assert_eq!(profile.page_title(), "Pravesh Rana | Portfolio");
    }

    #[test]
    fn test_skill_icon_is_optional() {
        let skill: Skill = serde_json::from_str(r#"{"label": "Machine Learning"}"#).unwrap();
        assert_eq!(skill.icon, None);

        let skill: Skill =
            serde_json::from_str(r#"{"label": "Python", "icon": "devicon-python-plain"}"#).unwrap();
        assert_eq!(skill.icon.as_deref(), Some("devicon-python-plain"));
    }

    #[test]
    fn test_shipped_icons_are_devicons() {
        for category in &portfolio().unwrap().skills {
            for icon in category.items.iter().filter_map(|s| s.icon.as_deref()) {
                assert!(icon.starts_with("devicon-"), "{icon}");
            }
        }
    }

    #[test]
    fn test_missing_link_fields_are_absent() {
        let p: ProjectEntry =
            serde_json::from_str(r#"{"title": "t", "description": "d", "outcome": "o"}"#).unwrap();
        assert!(p.links().is_empty());
        assert!(p.tags.is_empty());
    }

    #[test]
    fn test_single_link_is_kept_verbatim() {
        let p = project("", "https://github.com/example/repo");
        assert_eq!(
            p.links(),
            vec![(
                ProjectLinkKind::Repository,
                "https://github.com/example/repo".to_string()
            )]
        );

        let p = project("https://app.powerbi.com/view?r=abc", "");
        assert_eq!(
            p.links(),
            vec![(
                ProjectLinkKind::Dashboard,
                "https://app.powerbi.com/view?r=abc".to_string()
            )]
        );
    }

    #[test]
    fn test_both_links_dashboard_first() {
        let p = project("https://dash", "https://repo");
        let kinds: Vec<_> = p.links().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![ProjectLinkKind::Dashboard, ProjectLinkKind::Repository]);
    }

    #[test]
    fn test_shipped_project_links() {
        let portfolio = portfolio().unwrap();
        let counts: Vec<usize> = portfolio.projects.iter().map(|p| p.links().len()).collect();
        assert_eq!(counts, vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Portfolio::from_json("broken.json", b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::ParseError { ref file, .. } if file == "broken.json"));
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let err = Portfolio::from_assets("nope.json").unwrap_err();
        assert_eq!(err, ContentError::NotFound("nope.json".to_string()));
    }
}
