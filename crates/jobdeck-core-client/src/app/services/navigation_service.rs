// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynFeedDomainService,
};
use crate::domain::navigation::models::Page;
use crate::ClientEvent;

pub struct NavigationService {
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    feed_domain_service: DynFeedDomainService,
}

impl From<&AppDependencies> for NavigationService {
    fn from(deps: &AppDependencies) -> Self {
        NavigationService {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            ctx: deps.ctx.clone(),
            feed_domain_service: deps.feed_domain_service.clone(),
        }
    }
}

impl NavigationService {
    pub fn visible_page(&self) -> Page {
        self.ctx.visible_page()
    }

    /// Records an explicit navigation request. The router may keep it
    /// pending (e.g. while the profile is incomplete) and honor it once the
    /// gate opens. Transitioning onto the feed page activates a feed load.
    pub async fn navigate_to(&self, page: Page) {
        let page_before = self.ctx.visible_page();
        self.ctx.set_requested_page(page);
        let page_after = self.ctx.visible_page();

        if page_after == page_before {
            return;
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::PageChanged { page: page_after });

        if page_after == Page::Feed {
            self.feed_domain_service.handle_feed_page_activated().await;
        }
    }
}
