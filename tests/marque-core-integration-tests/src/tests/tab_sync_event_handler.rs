// marque-core-client/marque-core-integration-tests
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use marque_core_client::app::event_handlers::{StoreEvent, StoreEventHandler, TabSyncEventHandler};
use marque_core_client::dtos::{BookmarkChangeEvent, BookmarkChangeType, TabSignal};
use marque_core_client::test::{mock_data, MockAppDependencies};

#[tokio::test]
async fn test_consumes_tab_signals() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let signal = TabSignal {
        user_id: mock_data::user_id(),
        timestamp: mock_data::reference_date(),
    };

    deps.bookmarks_domain_service
        .expect_handle_tab_signal()
        .once()
        .with(predicate::eq(signal.clone()))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let handler = TabSyncEventHandler::from(&deps.into_deps());
    assert_eq!(handler.handle_event(StoreEvent::TabSync(signal)).await?, None);

    Ok(())
}

#[tokio::test]
async fn test_passes_on_unrelated_events() -> Result<()> {
    let deps = MockAppDependencies::default();

    let event = StoreEvent::Bookmarks(BookmarkChangeEvent {
        user_id: mock_data::user_id(),
        r#type: BookmarkChangeType::Inserted,
    });

    let handler = TabSyncEventHandler::from(&deps.into_deps());
    assert_eq!(handler.handle_event(event.clone()).await?, Some(event));

    Ok(())
}
