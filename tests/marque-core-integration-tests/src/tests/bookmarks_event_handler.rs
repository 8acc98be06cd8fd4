// marque-core-client/marque-core-integration-tests
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use marque_core_client::app::event_handlers::{
    BookmarksEventHandler, StoreEvent, StoreEventHandler,
};
use marque_core_client::dtos::{BookmarkChangeEvent, BookmarkChangeType, TabSignal};
use marque_core_client::test::{mock_data, MockAppDependencies};

#[tokio::test]
async fn test_consumes_live_feed_events() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let event = BookmarkChangeEvent {
        user_id: mock_data::user_id(),
        r#type: BookmarkChangeType::Deleted,
    };

    deps.bookmarks_domain_service
        .expect_handle_remote_change()
        .once()
        .with(predicate::eq(event.clone()))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let handler = BookmarksEventHandler::from(&deps.into_deps());
    assert_eq!(
        handler.handle_event(StoreEvent::Bookmarks(event)).await?,
        None
    );

    Ok(())
}

#[tokio::test]
async fn test_passes_on_unrelated_events() -> Result<()> {
    let deps = MockAppDependencies::default();

    let event = StoreEvent::TabSync(TabSignal {
        user_id: mock_data::user_id(),
        timestamp: mock_data::reference_date(),
    });

    let handler = BookmarksEventHandler::from(&deps.into_deps());
    assert_eq!(handler.handle_event(event.clone()).await?, Some(event));

    Ok(())
}
