// jobdeck-core-client/jobdeck-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use pretty_assertions::assert_eq;

use jobdeck_core_client::dtos::{IdentityError, UserKind};
use jobdeck_core_client::services::SessionService;
use jobdeck_core_client::test::{mock_session, MockAppDependencies};

#[tokio::test]
async fn test_bootstrap_reads_identity_exactly_once() {
    let mut deps = MockAppDependencies::default();

    deps.identity_service
        .expect_current_session()
        .once()
        .return_once(|| Box::pin(async { Ok(None) }));
    deps.session_domain_service
        .expect_apply_identity_update()
        .once()
        .withf(|update| update.session.is_none())
        .return_once(|_| Box::pin(async {}));

    let service = SessionService::from(&deps.into_deps());
    service.bootstrap().await;
    // The repeated call is ignored.
    service.bootstrap().await;
}

#[tokio::test]
async fn test_bootstrap_forwards_the_resolved_session() {
    let mut deps = MockAppDependencies::default();
    let session = mock_session(UserKind::JobSeeker);

    let expected = session.clone();
    deps.identity_service
        .expect_current_session()
        .once()
        .return_once(move || Box::pin(async move { Ok(Some(session)) }));
    deps.session_domain_service
        .expect_apply_identity_update()
        .once()
        .withf(move |update| update.session.as_ref() == Some(&expected))
        .return_once(|_| Box::pin(async {}));

    let service = SessionService::from(&deps.into_deps());
    service.bootstrap().await;
}

#[tokio::test]
async fn test_failed_identity_read_degrades_to_signed_out() {
    let mut deps = MockAppDependencies::default();

    deps.identity_service
        .expect_current_session()
        .once()
        .return_once(|| {
            Box::pin(async {
                Err(IdentityError::Generic {
                    msg: "provider unreachable".to_string(),
                })
            })
        });
    deps.session_domain_service
        .expect_apply_identity_update()
        .once()
        .withf(|update| update.session.is_none())
        .return_once(|_| Box::pin(async {}));

    let service = SessionService::from(&deps.into_deps());
    service.bootstrap().await;
}

#[tokio::test]
async fn test_failed_sign_out_still_clears_the_local_session() {
    let mut deps = MockAppDependencies::default();

    deps.identity_service
        .expect_sign_out()
        .once()
        .return_once(|| Box::pin(async { Err(IdentityError::TimedOut) }));
    deps.session_domain_service
        .expect_apply_identity_update()
        .once()
        .withf(|update| update.session.is_none())
        .return_once(|_| Box::pin(async {}));

    let service = SessionService::from(&deps.into_deps());
    service.sign_out().await;
    assert_eq!(service.current_session(), None);
}
