// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::deps::{AppDependencies, DynSessionDomainService};
use crate::domain::auth::models::{IdentityChange, IdentityUpdate};

/// Forwards identity-provider notifications into the session state. Each
/// notification is stamped with the session it carried, so a delayed
/// application cannot observe a value that arrived after it.
pub struct IdentityEventHandler {
    session_domain_service: DynSessionDomainService,
}

impl From<&AppDependencies> for IdentityEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        IdentityEventHandler {
            session_domain_service: deps.session_domain_service.clone(),
        }
    }
}

impl IdentityEventHandler {
    pub async fn handle_identity_change(&self, change: IdentityChange) {
        let update = IdentityUpdate::new(change.into_session());
        self.session_domain_service
            .apply_identity_update(update)
            .await;
    }
}
