// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;

/// Profile-completeness classification of the current session. Derived, not
/// stored remotely; reset to `Unknown` whenever the session is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ProfileStatus {
    /// The completeness check for the current session has not resolved yet.
    #[default]
    Unknown,
    Incomplete,
    Complete,
}

impl ProfileStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, ProfileStatus::Complete)
    }
}
