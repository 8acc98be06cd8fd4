// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, warn};
use url::Url;

use crate::app::deps::{
    DynAppContext, DynBookmarkStoreService, DynBookmarksRepository, DynClientEventDispatcher,
    DynTabSyncService, DynTimeProvider,
};
use crate::domain::bookmarks::models::{Bookmark, BookmarkChangeEvent, SyncState};
use crate::domain::shared::models::{BookmarkId, UserId};
use crate::domain::sync::models::TabSignal;
use crate::ClientEvent;

use super::super::BookmarksDomainService as BookmarksDomainServiceTrait;

pub struct BookmarksDomainServiceDependencies {
    pub bookmark_store_service: DynBookmarkStoreService,
    pub bookmarks_repo: DynBookmarksRepository,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub tab_sync_service: DynTabSyncService,
    pub time_provider: DynTimeProvider,
}

pub struct BookmarksDomainService {
    deps: BookmarksDomainServiceDependencies,
    /// Generation of the most recently issued refresh. A refresh only commits
    /// its result when its generation is still the latest, so a slow fetch
    /// can never overwrite a newer snapshot.
    refresh_generation: AtomicU64,
    state: RwLock<SyncState>,
}

impl BookmarksDomainService {
    pub fn new(deps: BookmarksDomainServiceDependencies) -> Self {
        BookmarksDomainService {
            deps,
            refresh_generation: AtomicU64::new(0),
            state: RwLock::new(SyncState {
                is_loading: true,
                ..Default::default()
            }),
        }
    }
}

#[async_trait]
impl BookmarksDomainServiceTrait for BookmarksDomainService {
    async fn refresh_bookmarks(&self) -> Result<()> {
        let Some(user_id) = self.deps.ctx.active_user_id() else {
            // Signed out. Force an empty snapshot without a store round-trip
            // and invalidate fetches still in flight for the previous user.
            self.refresh_generation.fetch_add(1, Ordering::SeqCst);
            self.deps.bookmarks_repo.replace(vec![]);
            self.update_sync_state(|state| state.is_loading = false);
            self.deps.client_event_dispatcher
                .dispatch_event(ClientEvent::BookmarksChanged);
            return Ok(());
        };

        let generation = self.refresh_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.update_sync_state(|state| state.is_loading = true);

        let result = self.deps.bookmark_store_service.load_bookmarks(&user_id).await;
        let is_latest = self.refresh_generation.load(Ordering::SeqCst) == generation;

        match result {
            Ok(bookmarks) => {
                if !is_latest {
                    debug!("Discarding stale bookmark snapshot for {user_id}");
                    return Ok(());
                }
                self.deps.bookmarks_repo.replace(bookmarks);
                self.update_sync_state(|state| state.is_loading = false);
                self.deps.client_event_dispatcher
                    .dispatch_event(ClientEvent::BookmarksChanged);
                Ok(())
            }
            Err(err) => {
                // Read failures are non-destructive; the previous snapshot
                // stays in place.
                if is_latest {
                    self.update_sync_state(|state| state.is_loading = false);
                }
                Err(err).context("Unable to load bookmarks")
            }
        }
    }

    async fn create_bookmark(&self, title: &str, url: &Url) -> Result<Bookmark> {
        let user_id = self.deps.ctx.active_user_id_or_err()?;

        self.update_sync_state(|state| state.is_creating = true);
        let result = self.perform_create(&user_id, title, url).await;
        self.update_sync_state(|state| state.is_creating = false);

        result
    }

    async fn delete_bookmark(&self, id: &BookmarkId) -> Result<()> {
        let user_id = self.deps.ctx.active_user_id_or_err()?;

        self.update_sync_state(|state| state.deleting_id = Some(id.clone()));
        let result = self.perform_delete(&user_id, id).await;
        self.update_sync_state(|state| state.deleting_id = None);

        result
    }

    async fn handle_remote_change(&self, event: BookmarkChangeEvent) -> Result<()> {
        // The feed is scoped at subscribe time, but events from a subscription
        // belonging to a previous session may still be queued.
        if self.deps.ctx.active_user_id().as_ref() != Some(&event.user_id) {
            return Ok(());
        }
        self.refresh_bookmarks().await
    }

    async fn handle_tab_signal(&self, signal: TabSignal) -> Result<()> {
        // The channel carries signals for every signed-in identity across
        // tabs; only the active user's are ours.
        if self.deps.ctx.active_user_id().as_ref() != Some(&signal.user_id) {
            return Ok(());
        }
        self.refresh_bookmarks().await
    }

    fn sync_state(&self) -> SyncState {
        self.state.read().clone()
    }
}

impl BookmarksDomainService {
    async fn perform_create(&self, user_id: &UserId, title: &str, url: &Url) -> Result<Bookmark> {
        let bookmark = self
            .deps
            .bookmark_store_service
            .save_bookmark(user_id, title, url)
            .await
            .context("Unable to add bookmark")?;

        self.notify_tabs(user_id).await;

        // The write has committed at this point. A failing follow-up refresh
        // leaves the snapshot stale, not the mutation unreported.
        if let Err(err) = self.refresh_bookmarks().await {
            warn!("Refresh after creating a bookmark failed: {err:#}");
        }

        Ok(bookmark)
    }

    async fn perform_delete(&self, user_id: &UserId, id: &BookmarkId) -> Result<()> {
        self.deps.bookmark_store_service
            .delete_bookmark(id, user_id)
            .await
            .context("Unable to delete bookmark")?;

        self.notify_tabs(user_id).await;

        if let Err(err) = self.refresh_bookmarks().await {
            warn!("Refresh after deleting a bookmark failed: {err:#}");
        }

        Ok(())
    }

    async fn notify_tabs(&self, user_id: &UserId) {
        self.deps.tab_sync_service
            .broadcast(TabSignal {
                user_id: user_id.clone(),
                timestamp: self.deps.time_provider.now(),
            })
            .await
    }

    fn update_sync_state(&self, block: impl FnOnce(&mut SyncState)) {
        let changed = {
            let mut state = self.state.write();
            let prior = state.clone();
            block(&mut state);
            *state != prior
        };
        if changed {
            self.deps.client_event_dispatcher
                .dispatch_event(ClientEvent::SyncStateChanged);
        }
    }
}
