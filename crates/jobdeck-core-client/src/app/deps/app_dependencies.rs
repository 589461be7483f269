// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::auth::services::{IdentityService, SessionDomainService};
use crate::domain::feed::services::FeedDomainService;
use crate::domain::general::services::HapticsService;
use crate::domain::jobs::repos::JobPostsRepository;
use crate::domain::profiles::repos::ProfileRepository;

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub(crate) type DynFeedDomainService = Arc<dyn FeedDomainService>;
pub(crate) type DynHapticsService = Arc<dyn HapticsService>;
pub(crate) type DynIdentityService = Arc<dyn IdentityService>;
pub(crate) type DynJobPostsRepository = Arc<dyn JobPostsRepository>;
pub(crate) type DynProfileRepository = Arc<dyn ProfileRepository>;
pub(crate) type DynSessionDomainService = Arc<dyn SessionDomainService>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub feed_domain_service: DynFeedDomainService,
    pub haptics_service: DynHapticsService,
    pub identity_service: DynIdentityService,
    pub job_posts_repo: DynJobPostsRepository,
    pub profile_repo: DynProfileRepository,
    pub session_domain_service: DynSessionDomainService,
}
