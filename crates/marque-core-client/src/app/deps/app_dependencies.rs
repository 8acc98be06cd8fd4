// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::{ClientEventDispatcherTrait, StoreEventHandlerQueue};
use crate::domain::bookmarks::repos::BookmarksRepository;
use crate::domain::bookmarks::services::{BookmarkStoreService, BookmarksDomainService};
use crate::domain::sync::services::TabSyncService;
use crate::util::TimeProvider;

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynBookmarkStoreService = Arc<dyn BookmarkStoreService>;
pub(crate) type DynBookmarksDomainService = Arc<dyn BookmarksDomainService>;
pub(crate) type DynBookmarksRepository = Arc<dyn BookmarksRepository>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub(crate) type DynStoreEventHandlerQueue = Arc<StoreEventHandlerQueue>;
pub(crate) type DynTabSyncService = Arc<dyn TabSyncService>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;

pub struct AppDependencies {
    pub bookmark_store_service: DynBookmarkStoreService,
    pub bookmarks_domain_service: DynBookmarksDomainService,
    pub bookmarks_repo: DynBookmarksRepository,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub store_event_handler_queue: DynStoreEventHandlerQueue,
    pub tab_sync_service: DynTabSyncService,
    pub time_provider: DynTimeProvider,
}
