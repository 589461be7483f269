// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::app::deps::{AppDependencies, DynClientEventDispatcher};
use crate::domain::feed::models::DetailsSelection;
use crate::domain::jobs::models::JobPost;
use crate::ClientEvent;

/// Open/closed state of the job-details overlay. Independent of the deck:
/// dismissals keep flowing underneath an open overlay, and closing it
/// resumes the stack where it left off.
pub struct DetailsService {
    client_event_dispatcher: DynClientEventDispatcher,
    selection: RwLock<DetailsSelection>,
}

impl From<&AppDependencies> for DetailsService {
    fn from(deps: &AppDependencies) -> Self {
        DetailsService {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            selection: Default::default(),
        }
    }
}

impl DetailsService {
    pub fn selection(&self) -> DetailsSelection {
        self.selection.read().clone()
    }

    pub fn open(&self, job: JobPost) {
        *self.selection.write() = DetailsSelection::opened(job);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::DetailsSelectionChanged);
    }

    pub fn close(&self) {
        *self.selection.write() = DetailsSelection::closed();
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::DetailsSelectionChanged);
    }
}
