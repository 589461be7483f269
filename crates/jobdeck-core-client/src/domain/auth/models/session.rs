// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::shared::models::UserId;

/// The authenticated identity as last reported by the identity provider.
/// Replaced wholesale on every auth event, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub kind: UserKind,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// Account classifier attached to the identity by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserKind {
    JobSeeker,
    Employer,
}

impl Session {
    pub fn is_job_seeker(&self) -> bool {
        self.kind == UserKind::JobSeeker
    }
}
