// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::deps::{AppDependencies, DynAppContext, DynClientEventDispatcher};
use crate::domain::navigation::models::Page;
use crate::domain::profiles::models::ProfileStatus;
use crate::dtos::ProfileSeed;
use crate::ClientEvent;

/// Bridges the profile-completion flow back into the router.
pub struct ProfileService {
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
}

impl From<&AppDependencies> for ProfileService {
    fn from(deps: &AppDependencies) -> Self {
        ProfileService {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            ctx: deps.ctx.clone(),
        }
    }
}

impl ProfileService {
    pub fn profile_status(&self) -> ProfileStatus {
        self.ctx.profile_status()
    }

    /// Identity fields the completion form is seeded with.
    pub fn completion_seed(&self) -> Option<ProfileSeed> {
        self.ctx.current_session().map(|session| ProfileSeed {
            user_id: session.user_id,
            full_name: session.full_name,
            email: session.email,
        })
    }

    /// The completion form reported success: the profile is complete and
    /// the profile page becomes visible.
    pub fn profile_completed(&self) {
        self.ctx.set_profile_status(ProfileStatus::Complete);
        self.ctx.set_requested_page(Page::Profile);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ProfileStatusChanged {
                status: ProfileStatus::Complete,
            });
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::PageChanged {
                page: self.ctx.visible_page(),
            });
    }
}
