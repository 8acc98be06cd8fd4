// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;
use url::Url;

use crate::domain::bookmarks::models::{Bookmark, BookmarkChangeEvent};
use crate::domain::shared::models::{BookmarkId, Subscription, UserId};

pub type BookmarkChangeHandler = Arc<dyn Fn(BookmarkChangeEvent) -> BoxFuture<'static, ()> + Send + Sync>;

/// The opaque remote row store. Every operation is a single round-trip; the
/// store owns network timeouts, row-level access control and the assignment
/// of ids and timestamps.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait BookmarkStoreService: Send + Sync {
    /// All bookmarks owned by `user_id`, ordered by `created_at` descending.
    async fn load_bookmarks(&self, user_id: &UserId) -> Result<Vec<Bookmark>>;

    /// Persists a new row and returns it in full. Fails if the store's row
    /// invariants are violated.
    async fn save_bookmark(&self, user_id: &UserId, title: &str, url: &Url) -> Result<Bookmark>;

    /// Deletes the row matching both `id` and `user_id`. Deleting a
    /// non-existent or non-owned id succeeds silently; that is the store's
    /// documented contract, which favors simplicity over error visibility
    /// when two clients race on the same delete.
    async fn delete_bookmark(&self, id: &BookmarkId, user_id: &UserId) -> Result<()>;

    /// Subscribes to the live change feed scoped to `user_id`. The handler
    /// receives every insert/update/delete for that user's rows until the
    /// returned subscription is dropped.
    async fn subscribe_to_changes(
        &self,
        user_id: &UserId,
        handler: BookmarkChangeHandler,
    ) -> Result<Subscription>;
}
