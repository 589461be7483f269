// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::deps::{AppDependencies, DynFeedDomainService};
use crate::domain::feed::models::{DismissTrigger, DismissVerdict, FeedSnapshot};
use crate::domain::jobs::models::JobPost;

/// The job feed and card deck as the UI consumes it.
pub struct FeedService {
    feed_domain_service: DynFeedDomainService,
}

impl From<&AppDependencies> for FeedService {
    fn from(deps: &AppDependencies) -> Self {
        FeedService {
            feed_domain_service: deps.feed_domain_service.clone(),
        }
    }
}

impl FeedService {
    pub fn snapshot(&self) -> FeedSnapshot {
        self.feed_domain_service.snapshot()
    }

    pub fn current_post(&self) -> Option<JobPost> {
        self.snapshot().current_post().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot().is_loading
    }

    /// Rejects the current card; it exits to the left.
    pub async fn reject(&self, trigger: DismissTrigger) {
        self.feed_domain_service
            .dismiss_current(DismissVerdict::Reject, trigger)
            .await
    }

    /// Approves the current card; it exits to the right.
    pub async fn approve(&self, trigger: DismissTrigger) {
        self.feed_domain_service
            .dismiss_current(DismissVerdict::Approve, trigger)
            .await
    }

    /// The deck finished animating out the dismissed card.
    pub async fn exit_animation_finished(&self) {
        self.feed_domain_service.complete_exit().await
    }

    /// Restarts an exhausted deck from the top.
    pub async fn restart(&self) {
        self.feed_domain_service.restart().await
    }

    /// Refetches the postings; the refresh affordance of an empty deck.
    pub async fn reload(&self) {
        self.feed_domain_service.reload().await
    }
}
