// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;

use crate::domain::auth::models::Session;
use crate::domain::profiles::models::ProfileStatus;

/// The single visible page. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Page {
    Feed,
    Profile,
    CompleteProfile,
}

impl Page {
    /// Derives the visible page from session presence, profile status and
    /// the last explicit navigation request. Total: every input combination
    /// maps to exactly one page.
    pub fn resolve(
        session: Option<&Session>,
        status: ProfileStatus,
        requested: Option<Page>,
    ) -> Page {
        let Some(session) = session else {
            // Signed-out visitors browse the read-only feed.
            return Page::Feed;
        };
        if status.is_complete() {
            return requested.unwrap_or(Page::Feed);
        }
        if !session.is_job_seeker() {
            // Wrong account type for this app; show the read-only profile
            // instead of the completion form.
            return Page::Profile;
        }
        Page::CompleteProfile
    }
}
