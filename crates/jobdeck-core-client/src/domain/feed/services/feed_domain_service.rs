// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::feed::models::{DismissTrigger, DismissVerdict, FeedSnapshot};

/// Owns the job list and the swipe cursor; the two are always invalidated
/// together.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait FeedDomainService: Send + Sync {
    /// The feed page became active. Fetches the active postings once; a
    /// fetch already outstanding for this activation is not re-entered.
    async fn handle_feed_page_activated(&self);

    /// Refetches the postings. The refresh affordance of an empty deck; the
    /// cursor is not touched unless the arriving list replaces it.
    async fn reload(&self);

    /// Drops the list and cursor for a replaced session. A fetch still in
    /// flight for the previous session is discarded when it lands.
    fn invalidate(&self);

    /// Starts dismissing the current card. Button triggers request a
    /// best-effort haptic pulse.
    async fn dismiss_current(&self, verdict: DismissVerdict, trigger: DismissTrigger);

    /// The card deck finished the exit animation for the outgoing card.
    async fn complete_exit(&self);

    /// Restarts an exhausted deck from the top.
    async fn restart(&self);

    fn snapshot(&self) -> FeedSnapshot;
}
