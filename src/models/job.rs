//! Job posting and job application data structures.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::{Entity, non_empty, null_as_default};
use crate::utils::url::resolve_image;

/// Employment type of a job posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Remote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Remote => "Remote",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::validation(format!("Unknown job type: {s}")))
    }
}

/// A job posting on the careers page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub job_type: JobType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: String,

    /// Server fields the dashboard does not edit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity for Job {
    const NOUN: &'static str = "Job";

    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }
}

/// The posting an application refers to.
///
/// The server sends either the bare id or, when it populates the reference,
/// the posting itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobRef {
    Id(String),
    Job(Box<Job>),
}

impl JobRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            JobRef::Id(id) => Some(id.as_str()).filter(|s| !s.is_empty()),
            JobRef::Job(job) => job.id(),
        }
    }

    /// The populated posting, if the server sent one.
    pub fn job(&self) -> Option<&Job> {
        match self {
            JobRef::Id(_) => None,
            JobRef::Job(job) => Some(job),
        }
    }
}

/// A candidate's application; read-only from the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,

    /// Uploaded resume path
    #[serde(default, deserialize_with = "null_as_default")]
    pub resume: String,

    /// Referenced job posting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobRef>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Server fields the dashboard does not edit
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobApplication {
    /// Display name: `name`, else `firstName lastName`.
    pub fn display_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.trim().to_string();
        }
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Title of the position applied for: `jobTitle`, else the populated
    /// posting's title.
    pub fn position(&self) -> &str {
        if !self.job_title.trim().is_empty() {
            return self.job_title.trim();
        }
        self.job_id
            .as_ref()
            .and_then(JobRef::job)
            .map_or("", |job| job.title.as_str())
    }
}

impl Entity for JobApplication {
    const NOUN: &'static str = "Application";

    fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    fn resolve_images(&mut self, image_base: &str) {
        self.resume = resolve_image(image_base, &self.resume);
    }
}
