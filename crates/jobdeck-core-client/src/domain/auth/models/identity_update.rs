// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tokio::time::Instant;

use crate::domain::auth::models::Session;

/// A single identity application, carrying the session that was current when
/// the triggering event fired. Applying the captured value instead of
/// re-reading shared state keeps overlapping delayed applications from
/// observing each other.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityUpdate {
    pub session: Option<Session>,
    pub captured_at: Instant,
}

impl IdentityUpdate {
    pub fn new(session: Option<Session>) -> Self {
        IdentityUpdate {
            session,
            captured_at: Instant::now(),
        }
    }
}
