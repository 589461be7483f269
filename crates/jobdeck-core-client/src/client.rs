// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::DynAppContext;
use crate::client_builder::{
    ClientBuilder, UndefinedIdentityService, UndefinedJobPostsRepository,
    UndefinedProfileRepository,
};
use crate::domain::auth::models::Session;
use crate::domain::auth::services::IdentitySubscription;
use crate::domain::navigation::models::Page;
use crate::services::{
    DetailsService, FeedService, NavigationService, ProfileService, SessionService,
};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<
        UndefinedIdentityService,
        UndefinedProfileRepository,
        UndefinedJobPostsRepository,
    > {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub details: DetailsService,
    pub feed: FeedService,
    pub navigation: NavigationService,
    pub profile: ProfileService,
    pub session: SessionService,
    pub(crate) ctx: DynAppContext,
    /// Released on teardown; the identity provider stops delivering change
    /// notifications once the client is gone.
    pub(crate) _identity_subscription: IdentitySubscription,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub async fn bootstrap(&self) {
        self.session.bootstrap().await
    }

    pub async fn sign_out(&self) {
        self.session.sign_out().await
    }

    pub fn current_session(&self) -> Option<Session> {
        self.ctx.current_session()
    }

    pub fn visible_page(&self) -> Page {
        self.ctx.visible_page()
    }
}
