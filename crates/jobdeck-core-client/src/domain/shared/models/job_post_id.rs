// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier of a job posting as assigned by the data store.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobPostId(String);

impl JobPostId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobPostId {
    fn from(value: String) -> Self {
        JobPostId(value)
    }
}

impl From<&str> for JobPostId {
    fn from(value: &str) -> Self {
        JobPostId(value.to_string())
    }
}

impl Debug for JobPostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "JobPostId({})", self.0)
    }
}

impl Display for JobPostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
