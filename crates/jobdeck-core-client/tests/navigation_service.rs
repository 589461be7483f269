// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use mockall::predicate;
use pretty_assertions::assert_eq;

use jobdeck_core_client::dtos::{Page, ProfileStatus, UserKind};
use jobdeck_core_client::services::NavigationService;
use jobdeck_core_client::test::{mock_session, MockAppDependencies};
use jobdeck_core_client::ClientEvent;

#[tokio::test]
async fn test_explicit_navigation_is_honored_for_complete_profiles() {
    let mut deps = MockAppDependencies::default();
    deps.ctx.set_session(Some(mock_session(UserKind::JobSeeker)));
    deps.ctx.set_profile_status(ProfileStatus::Complete);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::PageChanged {
            page: Page::Profile,
        }))
        .returning(|_| ());
    deps.feed_domain_service
        .expect_handle_feed_page_activated()
        .never();

    let service = NavigationService::from(&deps.into_deps());
    assert_eq!(service.visible_page(), Page::Feed);

    service.navigate_to(Page::Profile).await;
    assert_eq!(service.visible_page(), Page::Profile);
}

#[tokio::test]
async fn test_navigating_onto_the_feed_activates_a_load() {
    let mut deps = MockAppDependencies::default();
    deps.ctx.set_session(Some(mock_session(UserKind::JobSeeker)));
    deps.ctx.set_profile_status(ProfileStatus::Complete);
    deps.ctx.set_requested_page(Page::Profile);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::PageChanged { page: Page::Feed }))
        .returning(|_| ());
    deps.feed_domain_service
        .expect_handle_feed_page_activated()
        .once()
        .returning(|| Box::pin(async {}));

    let service = NavigationService::from(&deps.into_deps());
    service.navigate_to(Page::Feed).await;
    assert_eq!(service.visible_page(), Page::Feed);
}

#[tokio::test]
async fn test_navigation_cannot_bypass_the_profile_gate() {
    let mut deps = MockAppDependencies::default();
    deps.ctx.set_session(Some(mock_session(UserKind::JobSeeker)));
    deps.ctx.set_profile_status(ProfileStatus::Incomplete);

    deps.client_event_dispatcher.expect_dispatch_event().never();
    deps.feed_domain_service
        .expect_handle_feed_page_activated()
        .never();

    let service = NavigationService::from(&deps.into_deps());
    service.navigate_to(Page::Feed).await;

    // The request is recorded but the gate keeps the completion form up.
    assert_eq!(service.visible_page(), Page::CompleteProfile);
}
