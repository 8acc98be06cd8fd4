// marque-core-client/marque-core-integration-tests
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use marque_core_client::dtos::{CreateBookmarkRequest, UserId, TAB_SYNC_CHANNEL};
use marque_core_client::test::{ConstantTimeProvider, IncrementingIDProvider};
use marque_core_client::{
    Client, ClientDelegate, ClientEvent, InMemoryBookmarkStore, LocalTabSyncHub,
};

#[derive(Clone, Default)]
struct EventCollector {
    events: Arc<Mutex<Vec<ClientEvent>>>,
}

impl EventCollector {
    fn drain(&self) -> Vec<ClientEvent> {
        self.events.lock().drain(..).collect()
    }

    fn delegate(&self) -> Box<dyn ClientDelegate> {
        Box::new(self.clone())
    }
}

impl ClientDelegate for EventCollector {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        self.events.lock().push(event);
    }
}

fn test_store() -> (InMemoryBookmarkStore, Arc<ConstantTimeProvider>) {
    let time_provider = Arc::new(ConstantTimeProvider::ymd(2025, 3, 14));
    let store = InMemoryBookmarkStore::with_providers(
        Arc::new(IncrementingIDProvider::new("bookmark")),
        time_provider.clone(),
    );
    (store, time_provider)
}

fn connected_pair(
    store: &InMemoryBookmarkStore,
    hub: &LocalTabSyncHub,
    collector: &EventCollector,
) -> (Client, Client) {
    let tab_a = Client::builder()
        .set_store(Arc::new(store.clone()))
        .set_tab_sync_channel(Arc::new(hub.channel(TAB_SYNC_CHANNEL)))
        .build();
    let tab_b = Client::builder()
        .set_store(Arc::new(store.clone()))
        .set_tab_sync_channel(Arc::new(hub.channel(TAB_SYNC_CHANNEL)))
        .set_delegate(Some(collector.delegate()))
        .build();
    (tab_a, tab_b)
}

fn user_id() -> UserId {
    "jane.doe".parse().unwrap()
}

#[tokio::test]
async fn test_mutations_propagate_across_tabs() -> Result<()> {
    let (store, time_provider) = test_store();
    let hub = LocalTabSyncHub::new();
    let collector = EventCollector::default();

    let (tab_a, tab_b) = connected_pair(&store, &hub, &collector);
    tab_a.connect(&user_id()).await?;
    tab_b.connect(&user_id()).await?;
    collector.drain();

    let first = tab_a
        .bookmarks
        .create_bookmark(CreateBookmarkRequest::new(
            "Rust Blog",
            "https://blog.rust-lang.org/",
        )?)
        .await?;

    time_provider.set_ymd_hms(2025, 3, 14, 0, 0, 1);
    let second = tab_a
        .bookmarks
        .create_bookmark(CreateBookmarkRequest::new(
            "Rust Book",
            "https://doc.rust-lang.org/book/",
        )?)
        .await?;

    // Newest first, on both tabs, without either tab patching locally.
    let expected = vec![second.clone(), first.clone()];
    assert_eq!(tab_a.bookmarks.bookmarks(), expected);
    assert_eq!(tab_b.bookmarks.bookmarks(), expected);
    assert!(collector
        .drain()
        .contains(&ClientEvent::BookmarksChanged));

    tab_a.bookmarks.delete_bookmark(&first.id).await?;
    assert_eq!(tab_a.bookmarks.bookmarks(), vec![second.clone()]);
    assert_eq!(tab_b.bookmarks.bookmarks(), vec![second]);

    Ok(())
}

#[tokio::test]
async fn test_deleting_a_missing_bookmark_succeeds() -> Result<()> {
    let (store, _) = test_store();
    let hub = LocalTabSyncHub::new();
    let collector = EventCollector::default();

    let (tab_a, _tab_b) = connected_pair(&store, &hub, &collector);
    tab_a.connect(&user_id()).await?;

    tab_a.bookmarks.delete_bookmark(&"missing".parse()?).await?;
    assert_eq!(tab_a.bookmarks.sync_state().deleting_id, None);

    Ok(())
}

#[tokio::test]
async fn test_duplicate_titles_and_urls_are_allowed() -> Result<()> {
    let (store, _) = test_store();
    let hub = LocalTabSyncHub::new();
    let collector = EventCollector::default();

    let (tab_a, _tab_b) = connected_pair(&store, &hub, &collector);
    tab_a.connect(&user_id()).await?;

    let request = CreateBookmarkRequest::new("Rust Blog", "https://blog.rust-lang.org/")?;
    tab_a.bookmarks.create_bookmark(request.clone()).await?;
    tab_a.bookmarks.create_bookmark(request).await?;

    assert_eq!(tab_a.bookmarks.bookmarks().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_users_are_isolated() -> Result<()> {
    let (store, _) = test_store();
    let hub = LocalTabSyncHub::new();
    let collector = EventCollector::default();

    let (tab_a, other) = connected_pair(&store, &hub, &collector);
    tab_a.connect(&user_id()).await?;
    other.connect(&"john.doe".parse()?).await?;

    tab_a
        .bookmarks
        .create_bookmark(CreateBookmarkRequest::new(
            "Rust Blog",
            "https://blog.rust-lang.org/",
        )?)
        .await?;

    assert_eq!(tab_a.bookmarks.bookmarks().len(), 1);
    assert_eq!(other.bookmarks.bookmarks(), vec![]);

    Ok(())
}

#[tokio::test]
async fn test_sign_out_clears_the_snapshot() -> Result<()> {
    let (store, _) = test_store();
    let hub = LocalTabSyncHub::new();
    let collector = EventCollector::default();

    let (tab_a, _tab_b) = connected_pair(&store, &hub, &collector);
    tab_a.connect(&user_id()).await?;

    tab_a
        .bookmarks
        .create_bookmark(CreateBookmarkRequest::new(
            "Rust Blog",
            "https://blog.rust-lang.org/",
        )?)
        .await?;
    assert_eq!(tab_a.bookmarks.bookmarks().len(), 1);

    tab_a.disconnect().await;

    assert_eq!(tab_a.connected_user_id(), None);
    assert_eq!(tab_a.bookmarks.bookmarks(), vec![]);

    // The rows survive in the store and come back on the next sign-in.
    tab_a.connect(&user_id()).await?;
    assert_eq!(tab_a.bookmarks.bookmarks().len(), 1);

    Ok(())
}
