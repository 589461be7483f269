// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::jobs::models::JobPost;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait JobPostsRepository: Send + Sync {
    /// Fetches every posting whose status is `active`. Implementations ask
    /// the store for newest-first ordering; the feed re-sorts regardless.
    async fn get_active_posts(&self) -> Result<Vec<JobPost>>;
}
