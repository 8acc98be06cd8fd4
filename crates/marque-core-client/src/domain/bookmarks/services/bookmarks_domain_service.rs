// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::domain::bookmarks::models::{Bookmark, BookmarkChangeEvent, SyncState};
use crate::domain::shared::models::BookmarkId;
use crate::domain::sync::models::TabSignal;

/// Coordinates the authoritative snapshot against optimistic-free local
/// mutations, cross-tab signals and the store's live feed. All refresh
/// triggers converge here.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait BookmarksDomainService: Send + Sync {
    /// Re-fetches the active user's collection and replaces the snapshot
    /// wholesale. With no active session the snapshot is forced empty without
    /// a store call. Read failures retain the previous snapshot.
    async fn refresh_bookmarks(&self) -> Result<()>;

    /// Inserts a row, notifies other tabs, then refreshes. The snapshot is
    /// never patched with the insert response directly, so a rejected row can
    /// never appear locally. The result reflects the store write alone; a
    /// failing follow-up refresh is logged and leaves the snapshot stale.
    async fn create_bookmark(&self, title: &str, url: &Url) -> Result<Bookmark>;

    /// Deletes a row scoped to `(id, active user)`, notifies other tabs, then
    /// refreshes. `deleting_id` is set for the duration and always cleared.
    /// As with creation, the result reflects the store write alone.
    async fn delete_bookmark(&self, id: &BookmarkId) -> Result<()>;

    /// A row-level event arrived on the live feed.
    async fn handle_remote_change(&self, event: BookmarkChangeEvent) -> Result<()>;

    /// A signal arrived on the cross-tab channel.
    async fn handle_tab_signal(&self, signal: TabSignal) -> Result<()>;

    /// The current pending-operation flags.
    fn sync_state(&self) -> SyncState;
}
