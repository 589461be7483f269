// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynClientEventDispatcher, DynFeedDomainService,
    DynHapticsService, DynIdentityService, DynJobPostsRepository, DynProfileRepository,
    DynSessionDomainService,
};
use crate::app::event_handlers::{ClientEventDispatcher, IdentityEventHandler};
use crate::client::ClientInner;
use crate::domain::auth::services::impls::{
    SessionDomainService, SessionDomainServiceDependencies,
};
use crate::domain::auth::services::IdentityService;
use crate::domain::feed::services::impls::{FeedDomainService, FeedDomainServiceDependencies};
use crate::domain::general::services::HapticsService;
use crate::domain::jobs::repos::JobPostsRepository;
use crate::domain::profiles::repos::ProfileRepository;
use crate::infra::general::NoopHapticsService;
use crate::services::{
    DetailsService, FeedService, NavigationService, ProfileService, SessionService,
};
use crate::util::spawn;
use crate::{Client, ClientDelegate};

pub struct UndefinedIdentityService;
pub struct UndefinedProfileRepository;
pub struct UndefinedJobPostsRepository;

pub struct ClientBuilder<I, P, J> {
    config: AppConfig,
    delegate: Option<Box<dyn ClientDelegate>>,
    haptics_service: DynHapticsService,
    identity_service: I,
    job_posts_repo: J,
    profile_repo: P,
}

impl ClientBuilder<UndefinedIdentityService, UndefinedProfileRepository, UndefinedJobPostsRepository>
{
    pub(crate) fn new() -> Self {
        ClientBuilder {
            config: Default::default(),
            delegate: None,
            haptics_service: Arc::new(NoopHapticsService),
            identity_service: UndefinedIdentityService,
            job_posts_repo: UndefinedJobPostsRepository,
            profile_repo: UndefinedProfileRepository,
        }
    }
}

impl<P, J> ClientBuilder<UndefinedIdentityService, P, J> {
    pub fn set_identity_service<I: IdentityService + 'static>(
        self,
        identity_service: I,
    ) -> ClientBuilder<DynIdentityService, P, J> {
        ClientBuilder {
            config: self.config,
            delegate: self.delegate,
            haptics_service: self.haptics_service,
            identity_service: Arc::new(identity_service),
            job_posts_repo: self.job_posts_repo,
            profile_repo: self.profile_repo,
        }
    }
}

impl<I, J> ClientBuilder<I, UndefinedProfileRepository, J> {
    pub fn set_profile_repository<P: ProfileRepository + 'static>(
        self,
        profile_repo: P,
    ) -> ClientBuilder<I, DynProfileRepository, J> {
        ClientBuilder {
            config: self.config,
            delegate: self.delegate,
            haptics_service: self.haptics_service,
            identity_service: self.identity_service,
            job_posts_repo: self.job_posts_repo,
            profile_repo: Arc::new(profile_repo),
        }
    }
}

impl<I, P> ClientBuilder<I, P, UndefinedJobPostsRepository> {
    pub fn set_job_posts_repository<J: JobPostsRepository + 'static>(
        self,
        job_posts_repo: J,
    ) -> ClientBuilder<I, P, DynJobPostsRepository> {
        ClientBuilder {
            config: self.config,
            delegate: self.delegate,
            haptics_service: self.haptics_service,
            identity_service: self.identity_service,
            job_posts_repo: Arc::new(job_posts_repo),
            profile_repo: self.profile_repo,
        }
    }
}

impl<I, P, J> ClientBuilder<I, P, J> {
    pub fn set_haptics_service<H: HapticsService + 'static>(mut self, haptics_service: H) -> Self {
        self.haptics_service = Arc::new(haptics_service);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<DynIdentityService, DynProfileRepository, DynJobPostsRepository> {
    pub fn build(self) -> Client {
        let ctx = Arc::new(AppContext::new(self.config));
        let event_dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));
        let dyn_event_dispatcher: DynClientEventDispatcher = event_dispatcher.clone();

        let feed_domain_service: DynFeedDomainService =
            Arc::new(FeedDomainService::from(FeedDomainServiceDependencies {
                client_event_dispatcher: dyn_event_dispatcher.clone(),
                ctx: ctx.clone(),
                haptics_service: self.haptics_service.clone(),
                job_posts_repo: self.job_posts_repo.clone(),
            }));

        let session_domain_service: DynSessionDomainService = Arc::new(
            SessionDomainService::from(SessionDomainServiceDependencies {
                client_event_dispatcher: dyn_event_dispatcher.clone(),
                ctx: ctx.clone(),
                feed_domain_service: feed_domain_service.clone(),
                profile_repo: self.profile_repo.clone(),
            }),
        );

        let dependencies = AppDependencies {
            client_event_dispatcher: dyn_event_dispatcher,
            ctx,
            feed_domain_service,
            haptics_service: self.haptics_service,
            identity_service: self.identity_service,
            job_posts_repo: self.job_posts_repo,
            profile_repo: self.profile_repo,
            session_domain_service,
        };

        let identity_event_handler = Arc::new(IdentityEventHandler::from(&dependencies));
        let identity_subscription = dependencies.identity_service.subscribe_to_changes(Arc::new(
            move |change| {
                let handler = identity_event_handler.clone();
                spawn(async move { handler.handle_identity_change(change).await });
            },
        ));

        let client_inner = Arc::new(ClientInner {
            details: DetailsService::from(&dependencies),
            feed: FeedService::from(&dependencies),
            navigation: NavigationService::from(&dependencies),
            profile: ProfileService::from(&dependencies),
            session: SessionService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            _identity_subscription: identity_subscription,
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
