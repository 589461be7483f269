// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::app::deps::{AppContext, AppDependencies};
use crate::app::event_handlers::MockClientEventDispatcherTrait;
use crate::domain::auth::models::{Session, UserKind};
use crate::domain::auth::services::impls::SessionDomainServiceDependencies;
use crate::domain::auth::services::mocks::{MockIdentityService, MockSessionDomainService};
use crate::domain::feed::services::impls::FeedDomainServiceDependencies;
use crate::domain::feed::services::mocks::MockFeedDomainService;
use crate::domain::general::services::mocks::MockHapticsService;
use crate::domain::jobs::models::{JobPost, JobPostStatus};
use crate::domain::jobs::repos::mocks::MockJobPostsRepository;
use crate::domain::profiles::models::SeekerProfile;
use crate::domain::profiles::repos::mocks::MockProfileRepository;
use crate::domain::shared::models::{JobPostId, UserId};

pub fn mock_user_id() -> UserId {
    UserId::from("user-1")
}

pub fn mock_session(kind: UserKind) -> Session {
    Session {
        user_id: mock_user_id(),
        kind,
        full_name: Some("Jane Doe".to_string()),
        email: Some("jane.doe@example.org".to_string()),
    }
}

pub fn mock_seeker_profile(user_id: UserId) -> SeekerProfile {
    SeekerProfile {
        id: user_id,
        full_name: "Jane Doe".to_string(),
        headline: Some("Systems programmer".to_string()),
        skills: vec!["rust".to_string(), "sql".to_string()],
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn mock_job_post(id: &str, created_at: &str) -> JobPost {
    JobPost {
        id: JobPostId::from(id),
        company: "Acme Corp".to_string(),
        company_logo: None,
        title: "Rust Engineer".to_string(),
        location: "Lisbon".to_string(),
        salary: Some("€70k–€90k".to_string()),
        is_remote: true,
        description: "Build backend services.".to_string(),
        requirements: "Comfortable with async Rust.".to_string(),
        skills: vec!["rust".to_string(), "tokio".to_string()],
        apply_url: "https://jobs.example.org/apply".parse().unwrap(),
        status: JobPostStatus::Active,
        created_at: created_at.parse().unwrap(),
    }
}

impl Default for AppContext {
    fn default() -> Self {
        AppContext::new(Default::default())
    }
}

#[derive(Default)]
pub struct MockAppDependencies {
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub ctx: AppContext,
    pub feed_domain_service: MockFeedDomainService,
    pub haptics_service: MockHapticsService,
    pub identity_service: MockIdentityService,
    pub job_posts_repo: MockJobPostsRepository,
    pub profile_repo: MockProfileRepository,
    pub session_domain_service: MockSessionDomainService,
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies::from(self)
    }
}

impl From<MockAppDependencies> for AppDependencies {
    fn from(mock: MockAppDependencies) -> Self {
        AppDependencies {
            client_event_dispatcher: Arc::new(mock.client_event_dispatcher),
            ctx: Arc::new(mock.ctx),
            feed_domain_service: Arc::new(mock.feed_domain_service),
            haptics_service: Arc::new(mock.haptics_service),
            identity_service: Arc::new(mock.identity_service),
            job_posts_repo: Arc::new(mock.job_posts_repo),
            profile_repo: Arc::new(mock.profile_repo),
            session_domain_service: Arc::new(mock.session_domain_service),
        }
    }
}

#[derive(Default)]
pub struct MockSessionDomainServiceDependencies {
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub ctx: AppContext,
    pub feed_domain_service: MockFeedDomainService,
    pub profile_repo: MockProfileRepository,
}

impl MockSessionDomainServiceDependencies {
    pub fn into_deps(self) -> SessionDomainServiceDependencies {
        SessionDomainServiceDependencies {
            client_event_dispatcher: Arc::new(self.client_event_dispatcher),
            ctx: Arc::new(self.ctx),
            feed_domain_service: Arc::new(self.feed_domain_service),
            profile_repo: Arc::new(self.profile_repo),
        }
    }
}

#[derive(Default)]
pub struct MockFeedDomainServiceDependencies {
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub ctx: AppContext,
    pub haptics_service: MockHapticsService,
    pub job_posts_repo: MockJobPostsRepository,
}

impl MockFeedDomainServiceDependencies {
    pub fn into_deps(self) -> FeedDomainServiceDependencies {
        FeedDomainServiceDependencies {
            client_event_dispatcher: Arc::new(self.client_event_dispatcher),
            ctx: Arc::new(self.ctx),
            haptics_service: Arc::new(self.haptics_service),
            job_posts_repo: Arc::new(self.job_posts_repo),
        }
    }
}
