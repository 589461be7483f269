// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use details_selection::DetailsSelection;
pub use feed_snapshot::FeedSnapshot;
pub use swipe_navigator::{
    DismissDirection, DismissTrigger, DismissVerdict, SwipeNavigator, SwipePhase,
};

mod details_selection;
mod feed_snapshot;
mod swipe_navigator;
