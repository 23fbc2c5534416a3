//! Job posting entity model and draft.

use std::fmt;
use std::str::FromStr;

use harpal_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lenient;

/// Employment type of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown job type '{s}'"))
    }
}

/// Publication state of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Draft,
    Closed,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Draft => "draft",
            JobStatus::Closed => "closed",
        }
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [JobStatus::Active, JobStatus::Draft, JobStatus::Closed]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown job status '{s}'"))
    }
}

/// The employer a posting belongs to: a bare id, or the populated profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployerRef {
    Id(EntityId),
    Profile(EmployerProfile),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    #[serde(default, alias = "_id")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// A job posting as returned by `/jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "lenient::keyword")]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub vacancy: Option<u64>,
    #[serde(default)]
    pub apply_link: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub apply_before: Option<String>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::keyword")]
    pub status: Option<JobStatus>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub views: Option<u64>,
    #[serde(default)]
    pub employer: Option<EmployerRef>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<Timestamp>,
}

impl JobPosting {
    /// Company shown for the posting: the explicit field, else the
    /// populated employer's company name.
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_deref().or(match &self.employer {
            Some(EmployerRef::Profile(profile)) => profile.company_name.as_deref(),
            _ => None,
        })
    }

    pub fn is_featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }
}

/// Field set sent on `POST /jobs` and `PUT /jobs/{id}`.
///
/// Mirrors the job form: free-text inputs are strings, `vacancy` and
/// `applyBefore` included, exactly as the operator typed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    #[validate(length(min = 1, code = "required"))]
    pub title: String,
    #[validate(length(min = 1, code = "required"))]
    pub description: String,
    #[validate(length(min = 1, code = "required"))]
    pub location: String,
    pub salary: String,
    pub job_type: JobType,
    pub experience: String,
    pub skills: String,
    pub country: String,
    pub position: String,
    pub qualification: String,
    pub industry: String,
    pub vacancy: String,
    pub apply_link: String,
    pub tags: String,
    pub apply_before: String,
    pub is_featured: bool,
    pub seo_title: String,
    pub seo_description: String,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            salary: String::new(),
            job_type: JobType::FullTime,
            experience: String::new(),
            skills: String::new(),
            country: String::new(),
            position: String::new(),
            qualification: String::new(),
            industry: String::new(),
            vacancy: String::new(),
            apply_link: String::new(),
            tags: String::new(),
            apply_before: String::new(),
            is_featured: false,
            seo_title: String::new(),
            seo_description: String::new(),
        }
    }
}

impl From<&JobPosting> for JobDraft {
    fn from(job: &JobPosting) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            title: text(&job.title),
            description: text(&job.description),
            location: text(&job.location),
            salary: text(&job.salary),
            job_type: job.job_type.unwrap_or_default(),
            experience: text(&job.experience),
            skills: text(&job.skills),
            country: text(&job.country),
            position: text(&job.position),
            qualification: text(&job.qualification),
            industry: text(&job.industry),
            vacancy: job.vacancy.map(|v| v.to_string()).unwrap_or_default(),
            apply_link: text(&job.apply_link),
            tags: text(&job.tags),
            apply_before: job
                .apply_before
                .as_deref()
                .map(|d| lenient::date_part(d).to_string())
                .unwrap_or_default(),
            is_featured: job.is_featured(),
            seo_title: text(&job.seo_title),
            seo_description: text(&job.seo_description),
        }
    }
}
