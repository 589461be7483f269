// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::auth::models::IdentityUpdate;

/// Applies identity changes to the client state: session replacement,
/// profile-gate evaluation, page derivation and feed activation.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SessionDomainService: Send + Sync {
    /// Applies a captured identity. Completion is buffered so that at least
    /// the configured minimum loading duration elapses after the triggering
    /// event before the new identity becomes visible; an application that
    /// was overtaken by a later one is discarded.
    async fn apply_identity_update(&self, update: IdentityUpdate);
}
