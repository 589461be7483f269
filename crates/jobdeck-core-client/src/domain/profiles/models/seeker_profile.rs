// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;

/// The record a job seeker files before gaining access to the feed. Its
/// shape is dictated by the data store's `seeker_profiles` collection; the
/// gate only cares whether one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekerProfile {
    pub id: UserId,
    pub full_name: String,
    pub headline: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}
