// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::time::sleep;
use tracing::warn;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynHapticsService, DynJobPostsRepository,
};
use crate::domain::feed::models::{
    DismissTrigger, DismissVerdict, FeedSnapshot, SwipeNavigator,
};
use crate::domain::jobs::models::JobPost;
use crate::util::spawn;
use crate::ClientEvent;

use super::super::FeedDomainService as FeedDomainServiceTrait;

pub struct FeedDomainServiceDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub haptics_service: DynHapticsService,
    pub job_posts_repo: DynJobPostsRepository,
}

#[derive(Default)]
struct FeedState {
    posts: Vec<JobPost>,
    navigator: SwipeNavigator,
    is_loading: bool,
    /// Bumped on invalidation so a fetch that was in flight for a previous
    /// session cannot install its result.
    epoch: u64,
}

pub struct FeedDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    haptics_service: DynHapticsService,
    job_posts_repo: DynJobPostsRepository,
    state: Arc<RwLock<FeedState>>,
}

impl From<FeedDomainServiceDependencies> for FeedDomainService {
    fn from(deps: FeedDomainServiceDependencies) -> Self {
        FeedDomainService {
            client_event_dispatcher: deps.client_event_dispatcher,
            ctx: deps.ctx,
            haptics_service: deps.haptics_service,
            job_posts_repo: deps.job_posts_repo,
            state: Default::default(),
        }
    }
}

#[async_trait]
impl FeedDomainServiceTrait for FeedDomainService {
    async fn handle_feed_page_activated(&self) {
        self.load_posts().await
    }

    async fn reload(&self) {
        self.load_posts().await
    }

    fn invalidate(&self) {
        {
            let mut state = self.state.write();
            state.epoch += 1;
            state.posts.clear();
            state.navigator.replace_list(0);
            state.is_loading = false;
        }
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FeedChanged);
    }

    async fn dismiss_current(&self, verdict: DismissVerdict, trigger: DismissTrigger) {
        let began = self.state.write().navigator.begin_dismiss(verdict, trigger);
        if !began {
            return;
        }
        if trigger == DismissTrigger::Button {
            self.haptics_service.pulse();
        }
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SwipeStateChanged);
    }

    async fn complete_exit(&self) {
        let marker_generation = {
            let mut state = self.state.write();
            if !state.navigator.complete_exit() {
                return;
            }
            state.navigator.marker_generation()
        };
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SwipeStateChanged);

        // The incoming card must not inherit the outgoing card's animation
        // class; the marker is cleared shortly after the transition.
        let state = self.state.clone();
        let dispatcher = self.client_event_dispatcher.clone();
        let delay = self.ctx.config.exit_marker_clear_delay;
        spawn(async move {
            sleep(delay).await;
            if state.write().navigator.clear_exit_marker(marker_generation) {
                dispatcher.dispatch_event(ClientEvent::SwipeStateChanged);
            }
        });
    }

    async fn restart(&self) {
        let restarted = self.state.write().navigator.restart();
        if !restarted {
            return;
        }
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SwipeStateChanged);
    }

    fn snapshot(&self) -> FeedSnapshot {
        let state = self.state.read();
        FeedSnapshot {
            posts: state.posts.clone(),
            cursor: state.navigator.cursor(),
            phase: state.navigator.phase(),
            exit_direction: state.navigator.last_exit(),
            is_loading: state.is_loading,
        }
    }
}

impl FeedDomainService {
    async fn load_posts(&self) {
        let epoch = {
            let mut state = self.state.write();
            if state.is_loading {
                return;
            }
            state.is_loading = true;
            state.epoch
        };
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FeedChanged);

        let mut posts = match self.job_posts_repo.get_active_posts().await {
            Ok(posts) => posts,
            Err(err) => {
                warn!(
                    "Failed to load job postings. Reason: {}",
                    err.to_string()
                );
                vec![]
            }
        };
        // Newest first, whatever order the store returned.
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        {
            let mut state = self.state.write();
            if state.epoch != epoch {
                // The feed was invalidated while the fetch was in flight.
                return;
            }
            state.navigator.replace_list(posts.len());
            state.posts = posts;
            state.is_loading = false;
        }
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FeedChanged);
    }
}
