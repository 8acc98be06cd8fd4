// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;

use marque_core_client::dtos::{CreateBookmarkRequest, TAB_SYNC_CHANNEL};
use marque_core_client::{
    Client, ClientDelegate, ClientEvent, InMemoryBookmarkStore, LocalTabSyncHub, StoreConfig,
};

struct Delegate {
    name: &'static str,
}

impl ClientDelegate for Delegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        println!("[{}] {:?}", self.name, event);
    }
}

fn build_client(
    name: &'static str,
    store: &InMemoryBookmarkStore,
    hub: &LocalTabSyncHub,
) -> Client {
    Client::builder()
        .set_store(Arc::new(store.clone()))
        .set_tab_sync_channel(Arc::new(hub.channel(TAB_SYNC_CHANNEL)))
        .set_delegate(Some(Box::new(Delegate { name })))
        .build()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    match StoreConfig::from_env() {
        Ok(config) => println!("Store endpoint configured: {}", config.endpoint),
        Err(err) => println!("No remote store configured ({err}), using in-memory store."),
    }

    // Two clients over the same store and tab channel stand in for two
    // browser tabs of the same signed-in user.
    let store = InMemoryBookmarkStore::new();
    let hub = LocalTabSyncHub::default();

    let tab_a = build_client("tab a", &store, &hub);
    let tab_b = build_client("tab b", &store, &hub);

    let user_id = "jane.doe".parse()?;
    tab_a.connect(&user_id).await?;
    tab_b.connect(&user_id).await?;

    let request = CreateBookmarkRequest::new("Rust Book", "https://doc.rust-lang.org/book/")?;
    let bookmark = tab_a.bookmarks.create_bookmark(request).await?;
    println!("[tab a] created {:?}", bookmark.title);

    for client in [&tab_a, &tab_b] {
        for bookmark in client.bookmarks.bookmarks() {
            println!("  {} -> {}", bookmark.title, bookmark.url);
        }
    }

    tab_a.bookmarks.delete_bookmark(&bookmark.id).await?;
    println!("[tab a] deleted {:?}", bookmark.title);
    println!("[tab b] sees {} bookmarks", tab_b.bookmarks.bookmarks().len());

    tab_a.disconnect().await;
    tab_b.disconnect().await;

    Ok(())
}
