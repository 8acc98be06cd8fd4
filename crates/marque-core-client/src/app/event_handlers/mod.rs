// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use bookmarks_event_handler::BookmarksEventHandler;
pub use event_handler_queue::StoreEventHandlerQueue;
pub use store_event::StoreEvent;
pub use tab_sync_event_handler::TabSyncEventHandler;

use crate::ClientEvent;

mod bookmarks_event_handler;
mod event_handler_queue;
mod store_event;
mod tab_sync_event_handler;

/// `StoreEventHandler` is a trait representing a handler for events arriving
/// from the remote store's live feed or the cross-tab channel.
///
/// Implementors should provide a `handle_event` method, which takes a
/// `StoreEvent` and returns an `Option<StoreEvent>`. If the handler returns
/// `None`, the event has been consumed and no further processing should be
/// done. If it returns `Some(event)`, the event is not consumed and should be
/// passed to the next handler.
#[async_trait]
pub trait StoreEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: StoreEvent) -> Result<Option<StoreEvent>>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
