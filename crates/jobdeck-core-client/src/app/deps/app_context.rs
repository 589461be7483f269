// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use parking_lot::RwLock;

use crate::domain::auth::models::Session;
use crate::domain::navigation::models::Page;
use crate::domain::profiles::models::ProfileStatus;

pub struct AppConfig {
    /// Floor under every identity application, so page transitions show the
    /// loading state for a consistent, perceivable duration instead of
    /// flashing when the provider answers instantly.
    pub min_loading_duration: Duration,
    /// How long a dismissed card's exit direction outlives the cursor
    /// advance before it is cleared.
    pub exit_marker_clear_delay: Duration,
}

pub struct AppContext {
    pub session: RwLock<Option<Session>>,
    pub profile_status: RwLock<ProfileStatus>,
    pub requested_page: RwLock<Option<Page>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Default::default(),
            profile_status: Default::default(),
            requested_page: Default::default(),
            config,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_loading_duration: Duration::from_millis(500),
            exit_marker_clear_delay: Duration::from_millis(250),
        }
    }
}

impl AppContext {
    pub fn current_session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn profile_status(&self) -> ProfileStatus {
        *self.profile_status.read()
    }

    pub fn requested_page(&self) -> Option<Page> {
        *self.requested_page.read()
    }

    pub fn visible_page(&self) -> Page {
        Page::resolve(
            self.session.read().as_ref(),
            self.profile_status(),
            self.requested_page(),
        )
    }
}

impl AppContext {
    pub fn set_session(&self, session: Option<Session>) {
        *self.session.write() = session;
    }

    pub fn set_profile_status(&self, status: ProfileStatus) {
        *self.profile_status.write() = status;
    }

    pub fn set_requested_page(&self, page: Page) {
        self.requested_page.write().replace(page);
    }

    pub fn clear_requested_page(&self) {
        self.requested_page.write().take();
    }
}
