// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::feed::models::{DismissDirection, SwipePhase};
use crate::domain::jobs::models::JobPost;

/// Immutable view of the feed as the card deck consumes it. "Loading",
/// "empty" and "populated" are distinguished by `is_loading` plus list
/// length alone; a failed fetch looks like an empty feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    pub posts: Vec<JobPost>,
    pub cursor: usize,
    pub phase: SwipePhase,
    pub exit_direction: Option<DismissDirection>,
    pub is_loading: bool,
}

impl FeedSnapshot {
    pub fn current_post(&self) -> Option<&JobPost> {
        self.posts.get(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        !self.posts.is_empty() && self.cursor == self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
