use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Singleton key of the portfolio aggregate.
pub const PORTFOLIO_ID: i16 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
}

/// Contact card of the site owner. Image and resume live outside this
/// struct: they are stored in their own columns and never travel with
/// content edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub social: Social,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub period: String,
    pub school: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Everything in the aggregate except the binary-bearing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PortfolioContent {
    pub personal: Personal,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub projects: Vec<ProjectEntry>,
}

/// Top-level sections supplied by a client edit. Sections left out are
/// kept as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal: Option<Personal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectEntry>>,
}

impl PortfolioPatch {
    pub fn is_empty(&self) -> bool {
        self.personal.is_none()
            && self.education.is_none()
            && self.skills.is_none()
            && self.achievements.is_none()
            && self.projects.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Image,
    Resume,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Resume => "resume",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalView {
    #[serde(flatten)]
    pub personal: Personal,
    pub has_image: bool,
    pub has_resume: bool,
}

/// Visitor-facing aggregate: heavy fields replaced by presence flags.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortfolioView {
    pub personal: PersonalView,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub version: i64,
    /// Set when the store could not be read and static content is served instead.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl PortfolioView {
    pub fn new(content: PortfolioContent, has_image: bool, has_resume: bool, version: i64) -> Self {
        Self {
            personal: PersonalView {
                personal: content.personal,
                has_image,
                has_resume,
            },
            education: content.education,
            skills: content.skills,
            achievements: content.achievements,
            projects: content.projects,
            version,
            fallback: false,
        }
    }

    pub fn fallback(seed: &PortfolioContent) -> Self {
        Self {
            fallback: true,
            ..Self::new(seed.clone(), false, false, 0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PersonalFull {
    #[serde(flatten)]
    pub personal: Personal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
}

/// Admin-facing aggregate including the stored data-URIs.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortfolioFull {
    pub personal: PersonalFull,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub version: i64,
}

impl PortfolioFull {
    pub fn new(
        content: PortfolioContent,
        image: Option<String>,
        resume: Option<String>,
        version: i64,
    ) -> Self {
        Self {
            personal: PersonalFull {
                personal: content.personal,
                image,
                resume,
            },
            education: content.education,
            skills: content.skills,
            achievements: content.achievements,
            projects: content.projects,
            version,
        }
    }
}
