// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use futures::FutureExt;
use parking_lot::Mutex;
use tracing::{error, info, warn};

use crate::app::deps::{
    AppDependencies, DynAppContext, DynBookmarkStoreService, DynBookmarksDomainService,
    DynClientEventDispatcher, DynStoreEventHandlerQueue, DynTabSyncService, SessionProperties,
};
use crate::app::event_handlers::StoreEvent;
use crate::client_event::SessionEvent;
use crate::domain::shared::models::{Subscription, UserId};
use crate::ClientEvent;

pub struct SessionService {
    bookmark_store_service: DynBookmarkStoreService,
    bookmarks_domain_service: DynBookmarksDomainService,
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    store_event_handler_queue: DynStoreEventHandlerQueue,
    tab_sync_service: DynTabSyncService,
    subscriptions: Mutex<Vec<Subscription>>,
}

impl From<&AppDependencies> for SessionService {
    fn from(deps: &AppDependencies) -> Self {
        SessionService {
            bookmark_store_service: deps.bookmark_store_service.clone(),
            bookmarks_domain_service: deps.bookmarks_domain_service.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            ctx: deps.ctx.clone(),
            store_event_handler_queue: deps.store_event_handler_queue.clone(),
            tab_sync_service: deps.tab_sync_service.clone(),
            subscriptions: Default::default(),
        }
    }
}

impl SessionService {
    /// Activates a session for `user_id`: establishes the live feed and the
    /// cross-tab listener, then performs the initial refresh. A failing
    /// subscription degrades live sync but never fails the sign-in; a failing
    /// initial refresh keeps the (empty) snapshot and is surfaced on the next
    /// refresh trigger.
    pub async fn connect(&self, user_id: &UserId) -> Result<()> {
        self.disconnect().await;

        info!("Signing in {user_id}…");
        self.ctx.set_session_properties(SessionProperties {
            user_id: user_id.clone(),
        });

        let queue = self.store_event_handler_queue.clone();
        match self
            .bookmark_store_service
            .subscribe_to_changes(
                user_id,
                Arc::new(move |event| {
                    let queue = queue.clone();
                    async move { queue.handle_event(StoreEvent::Bookmarks(event)).await }.boxed()
                }),
            )
            .await
        {
            Ok(subscription) => self.subscriptions.lock().push(subscription),
            // Live sync becomes unavailable until the next sign-in; the
            // manual and cross-tab refresh paths still converge.
            Err(err) => error!("Live bookmark feed subscription failed: {err}"),
        }

        let queue = self.store_event_handler_queue.clone();
        match self.tab_sync_service.subscribe(Arc::new(move |signal| {
            let queue = queue.clone();
            async move { queue.handle_event(StoreEvent::TabSync(signal)).await }.boxed()
        })) {
            Ok(subscription) => self.subscriptions.lock().push(subscription),
            Err(err) => warn!("Cross-tab channel unavailable: {err}"),
        }

        if let Err(err) = self.bookmarks_domain_service.refresh_bookmarks().await {
            warn!("Initial bookmark refresh failed: {err:#}");
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionStatusChanged {
                event: SessionEvent::Connect,
            });

        Ok(())
    }

    /// Tears down both listeners and clears the snapshot. In-flight fetches
    /// from the closed session are invalidated by the refresh generation and
    /// can no longer land.
    pub async fn disconnect(&self) {
        self.subscriptions.lock().clear();

        if self.ctx.active_user_id().is_none() {
            return;
        }

        self.ctx.reset_session_properties();
        if let Err(err) = self.bookmarks_domain_service.refresh_bookmarks().await {
            warn!("Failed to clear bookmark snapshot on sign-out: {err:#}");
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionStatusChanged {
                event: SessionEvent::Disconnect,
            });
    }
}
