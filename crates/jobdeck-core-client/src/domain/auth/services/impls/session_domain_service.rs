// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynFeedDomainService, DynProfileRepository,
};
use crate::domain::auth::models::{IdentityUpdate, Session};
use crate::domain::navigation::models::Page;
use crate::domain::profiles::models::ProfileStatus;
use crate::ClientEvent;

use super::super::SessionDomainService as SessionDomainServiceTrait;

pub struct SessionDomainServiceDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub feed_domain_service: DynFeedDomainService,
    pub profile_repo: DynProfileRepository,
}

pub struct SessionDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    feed_domain_service: DynFeedDomainService,
    profile_repo: DynProfileRepository,
    next_seq: AtomicU64,
    applied_seq: Mutex<u64>,
}

impl From<SessionDomainServiceDependencies> for SessionDomainService {
    fn from(deps: SessionDomainServiceDependencies) -> Self {
        SessionDomainService {
            client_event_dispatcher: deps.client_event_dispatcher,
            ctx: deps.ctx,
            feed_domain_service: deps.feed_domain_service,
            profile_repo: deps.profile_repo,
            next_seq: AtomicU64::new(0),
            applied_seq: Mutex::new(0),
        }
    }
}

#[async_trait]
impl SessionDomainServiceTrait for SessionDomainService {
    async fn apply_identity_update(&self, update: IdentityUpdate) {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let min_duration = self.ctx.config.min_loading_duration;
        let elapsed = update.captured_at.elapsed();
        if elapsed < min_duration {
            sleep(min_duration - elapsed).await;
        }

        {
            let mut applied_seq = self.applied_seq.lock();
            if *applied_seq > seq {
                // A later notification finished first; this one is stale.
                return;
            }
            *applied_seq = seq;

            self.ctx.set_session(update.session.clone());
            self.ctx.set_profile_status(ProfileStatus::Unknown);
            self.ctx.clear_requested_page();
        }
        self.feed_domain_service.invalidate();
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionChanged);

        let status = self.evaluate_profile_status(update.session.as_ref()).await;

        {
            let mut applied_seq = self.applied_seq.lock();
            if *applied_seq != seq {
                // Superseded while the profile query was in flight.
                return;
            }
            self.ctx.set_profile_status(status);
        }
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ProfileStatusChanged { status });

        let page = self.ctx.visible_page();
        info!("Applied identity change. Visible page is now '{}'.", page);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::PageChanged { page });

        if page == Page::Feed {
            self.feed_domain_service.handle_feed_page_activated().await;
        }
    }
}

impl SessionDomainService {
    /// Runs once per identity change; the result is cached as the session's
    /// ProfileStatus until the next change.
    async fn evaluate_profile_status(&self, session: Option<&Session>) -> ProfileStatus {
        let Some(session) = session else {
            return ProfileStatus::Incomplete;
        };

        if !session.is_job_seeker() {
            // Wrong account type for this app. The router sends these to the
            // read-only profile page; no point querying the store.
            return ProfileStatus::Incomplete;
        }

        match self.profile_repo.get(&session.user_id).await {
            Ok(Some(_)) => ProfileStatus::Complete,
            Ok(None) => ProfileStatus::Incomplete,
            Err(err) => {
                warn!(
                    "Failed to load seeker profile. Reason: {}",
                    err.to_string()
                );
                ProfileStatus::Incomplete
            }
        }
    }
}
