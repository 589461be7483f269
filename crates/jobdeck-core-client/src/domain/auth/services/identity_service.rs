// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::models::{IdentityChange, IdentityError, Session};

pub type IdentityChangeHandler = Arc<dyn Fn(IdentityChange) + Send + Sync>;

/// Boundary to the external identity provider.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait IdentityService: Send + Sync {
    /// One-shot read of the currently authenticated session, if any.
    async fn current_session(&self) -> Result<Option<Session>, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Registers for sign-in, sign-out and token-refresh notifications.
    /// Delivery lasts until the returned subscription is dropped.
    fn subscribe_to_changes(&self, handler: IdentityChangeHandler) -> IdentitySubscription;
}

/// Handle to an active identity-change registration. Dropping it releases
/// the registration with the provider.
pub struct IdentitySubscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl IdentitySubscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        IdentitySubscription {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with no release action, for providers whose
    /// registration ends with the provider itself.
    pub fn detached() -> Self {
        IdentitySubscription { release: None }
    }
}

impl Drop for IdentitySubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release()
        }
    }
}
