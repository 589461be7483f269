// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::profiles::models::SeekerProfile;
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    /// Loads the seeker profile keyed by `user_id`, if one was filed.
    async fn get(&self, user_id: &UserId) -> Result<Option<SeekerProfile>>;
}
