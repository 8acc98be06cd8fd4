// marque-core-client/marque-core-integration-tests
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{format_err, Result};
use mockall::predicate;
use pretty_assertions::assert_eq;

use marque_core_client::app::deps::AppContext;
use marque_core_client::app::services::SessionService;
use marque_core_client::dtos::Subscription;
use marque_core_client::test::{mock_data, MockAppDependencies};
use marque_core_client::{ClientEvent, SessionEvent};

#[tokio::test]
async fn test_connect_establishes_session() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx = AppContext::new();

    deps.bookmark_store_service
        .expect_subscribe_to_changes()
        .once()
        .withf(|user_id, _| user_id == &mock_data::user_id())
        .return_once(|_, _| Box::pin(async { Ok(Subscription::empty()) }));

    deps.tab_sync_service
        .expect_subscribe()
        .once()
        .return_once(|_| Ok(Subscription::empty()));

    deps.bookmarks_domain_service
        .expect_refresh_bookmarks()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::SessionStatusChanged {
            event: SessionEvent::Connect,
        }))
        .return_once(|_| ());

    let deps = deps.into_deps();
    let ctx = deps.ctx.clone();

    let service = SessionService::from(&deps);
    service.connect(&mock_data::user_id()).await?;

    assert_eq!(ctx.active_user_id(), Some(mock_data::user_id()));

    Ok(())
}

#[tokio::test]
async fn test_connect_survives_listener_failures() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx = AppContext::new();

    // Neither a dead live feed nor a missing tab channel may fail sign-in.
    deps.bookmark_store_service
        .expect_subscribe_to_changes()
        .once()
        .return_once(|_, _| Box::pin(async { Err(format_err!("realtime unavailable")) }));

    deps.tab_sync_service
        .expect_subscribe()
        .once()
        .return_once(|_| Err(format_err!("channel unavailable")));

    deps.bookmarks_domain_service
        .expect_refresh_bookmarks()
        .once()
        .return_once(|| Box::pin(async { Err(format_err!("store unreachable")) }));

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::SessionStatusChanged {
            event: SessionEvent::Connect,
        }))
        .return_once(|_| ());

    let service = SessionService::from(&deps.into_deps());
    service.connect(&mock_data::user_id()).await?;

    Ok(())
}

#[tokio::test]
async fn test_disconnect_clears_session() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.bookmarks_domain_service
        .expect_refresh_bookmarks()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::SessionStatusChanged {
            event: SessionEvent::Disconnect,
        }))
        .return_once(|_| ());

    let deps = deps.into_deps();
    let ctx = deps.ctx.clone();

    let service = SessionService::from(&deps);
    service.disconnect().await;

    assert_eq!(ctx.active_user_id(), None);

    Ok(())
}

#[tokio::test]
async fn test_disconnect_without_session_is_a_noop() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx = AppContext::new();

    // No refresh, no event.
    let service = SessionService::from(&deps.into_deps());
    service.disconnect().await;

    Ok(())
}
