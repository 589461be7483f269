// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::time::Instant;
use tracing::warn;

use crate::app::deps::{
    AppDependencies, DynAppContext, DynIdentityService, DynSessionDomainService,
};
use crate::domain::auth::models::{IdentityUpdate, Session};

pub struct SessionService {
    ctx: DynAppContext,
    identity_service: DynIdentityService,
    session_domain_service: DynSessionDomainService,
    did_bootstrap: AtomicBool,
}

impl From<&AppDependencies> for SessionService {
    fn from(deps: &AppDependencies) -> Self {
        SessionService {
            ctx: deps.ctx.clone(),
            identity_service: deps.identity_service.clone(),
            session_domain_service: deps.session_domain_service.clone(),
            did_bootstrap: AtomicBool::new(false),
        }
    }
}

impl SessionService {
    /// Performs the single initial identity read. The result is applied
    /// through the minimum-delay buffer, so the loading state stays visible
    /// even when the provider answers instantly. Repeated calls are ignored.
    pub async fn bootstrap(&self) {
        if self.did_bootstrap.swap(true, Ordering::SeqCst) {
            warn!("Ignoring repeated bootstrap call.");
            return;
        }

        let captured_at = Instant::now();
        let session = match self.identity_service.current_session().await {
            Ok(session) => session,
            Err(err) => {
                warn!(
                    "Failed to read the current session. Reason: {}",
                    err.to_string()
                );
                None
            }
        };
        self.session_domain_service
            .apply_identity_update(IdentityUpdate {
                session,
                captured_at,
            })
            .await;
    }

    /// Signs out with the provider and clears the local session regardless
    /// of the provider's answer; the UI must never stay stuck signed-in
    /// because a remote call failed.
    pub async fn sign_out(&self) {
        if let Err(err) = self.identity_service.sign_out().await {
            warn!(
                "Sign-out failed remotely, clearing the local session anyway. Reason: {}",
                err.to_string()
            );
        }
        self.session_domain_service
            .apply_identity_update(IdentityUpdate::new(None))
            .await;
    }

    pub fn current_session(&self) -> Option<Session> {
        self.ctx.current_session()
    }
}
