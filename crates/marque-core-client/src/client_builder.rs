// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppContext, AppDependencies, DynAppContext, DynBookmarkStoreService,
    DynBookmarksDomainService, DynBookmarksRepository, DynTabSyncService,
};
use crate::app::event_handlers::{BookmarksEventHandler, StoreEventHandlerQueue, TabSyncEventHandler};
use crate::app::services::{BookmarksService, SessionService};
use crate::client::ClientInner;
use crate::domain::bookmarks::services::impls::{
    BookmarksDomainService, BookmarksDomainServiceDependencies,
};
use crate::infra::bookmarks::InMemoryBookmarksRepository;
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::sync::NoopTabSyncChannel;
use crate::util::{SystemTimeProvider, TimeProvider};
use crate::{Client, ClientDelegate};

pub struct UndefinedStore;

pub struct ClientBuilder<S> {
    delegate: Option<Box<dyn ClientDelegate>>,
    store: S,
    tab_sync_service: DynTabSyncService,
    time_provider: Arc<dyn TimeProvider>,
}

impl ClientBuilder<UndefinedStore> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            delegate: None,
            store: UndefinedStore,
            tab_sync_service: Arc::new(NoopTabSyncChannel::default()),
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }

    pub fn set_store(self, store: DynBookmarkStoreService) -> ClientBuilder<DynBookmarkStoreService> {
        ClientBuilder {
            delegate: self.delegate,
            store,
            tab_sync_service: self.tab_sync_service,
            time_provider: self.time_provider,
        }
    }
}

impl<S> ClientBuilder<S> {
    /// Cross-tab sync defaults to a no-op channel; environments with a real
    /// broadcast surface pass one in here.
    pub fn set_tab_sync_channel(mut self, tab_sync_service: DynTabSyncService) -> Self {
        self.tab_sync_service = tab_sync_service;
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<DynBookmarkStoreService> {
    pub fn build(self) -> Client {
        let store_event_handler_queue = Arc::new(StoreEventHandlerQueue::new());
        let event_dispatcher = Arc::new(ImmediateClientEventDispatcher::new(self.delegate));

        let ctx: DynAppContext = Arc::new(AppContext::new());
        let bookmarks_repo: DynBookmarksRepository = Arc::new(InMemoryBookmarksRepository::new());

        let bookmarks_domain_service: DynBookmarksDomainService = Arc::new(
            BookmarksDomainService::new(BookmarksDomainServiceDependencies {
                bookmark_store_service: self.store.clone(),
                bookmarks_repo: bookmarks_repo.clone(),
                client_event_dispatcher: event_dispatcher.clone(),
                ctx: ctx.clone(),
                tab_sync_service: self.tab_sync_service.clone(),
                time_provider: self.time_provider.clone(),
            }),
        );

        let dependencies = AppDependencies {
            bookmark_store_service: self.store,
            bookmarks_domain_service,
            bookmarks_repo,
            client_event_dispatcher: event_dispatcher.clone(),
            ctx,
            store_event_handler_queue: store_event_handler_queue.clone(),
            tab_sync_service: self.tab_sync_service,
            time_provider: self.time_provider,
        };

        store_event_handler_queue.set_handlers(vec![
            Box::new(BookmarksEventHandler::from(&dependencies)),
            Box::new(TabSyncEventHandler::from(&dependencies)),
        ]);

        let client_inner = Arc::new(ClientInner {
            bookmarks: BookmarksService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            session: SessionService::from(&dependencies),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
