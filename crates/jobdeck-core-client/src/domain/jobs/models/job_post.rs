// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use url::Url;

use crate::domain::shared::models::JobPostId;

/// A published job posting. Immutable once fetched; the feed replaces the
/// whole list on refetch instead of patching entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPost {
    pub id: JobPostId,
    pub company: String,
    pub company_logo: Option<Url>,
    pub title: String,
    pub location: String,
    /// Free-form compensation text, e.g. "€70k–€90k".
    pub salary: Option<String>,
    pub is_remote: bool,
    pub description: String,
    pub requirements: String,
    /// Skill tags in the order the employer listed them.
    pub skills: Vec<String>,
    pub apply_url: Url,
    pub status: JobPostStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JobPostStatus {
    Active,
    Paused,
    Closed,
}
