// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use url::Url;

use crate::domain::bookmarks::models::{Bookmark, BookmarkChangeEvent, BookmarkChangeType};
use crate::domain::bookmarks::services::{BookmarkChangeHandler, BookmarkStoreService};
use crate::domain::shared::models::{BookmarkId, Subscription, UserId};
use crate::util::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};

type Subscribers = Arc<RwLock<HashMap<u64, (UserId, BookmarkChangeHandler)>>>;

/// Reference implementation of the remote row store: a shared in-process
/// table with a per-user change feed. Honors the documented store contract,
/// including the silently-succeeding delete for non-existent or non-owned
/// rows. Clone handles share the same table, which makes it double as a
/// multi-device fixture.
#[derive(Clone)]
pub struct InMemoryBookmarkStore {
    rows: Arc<RwLock<Vec<Bookmark>>>,
    subscribers: Subscribers,
    next_subscriber_id: Arc<AtomicU64>,
    id_provider: Arc<dyn IDProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl InMemoryBookmarkStore {
    pub fn new() -> Self {
        Self::with_providers(
            Arc::new(UUIDProvider::default()),
            Arc::new(SystemTimeProvider::default()),
        )
    }

    pub fn with_providers(
        id_provider: Arc<dyn IDProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        InMemoryBookmarkStore {
            rows: Default::default(),
            subscribers: Default::default(),
            next_subscriber_id: Default::default(),
            id_provider,
            time_provider,
        }
    }

    async fn publish(&self, event: BookmarkChangeEvent) {
        let handlers = self
            .subscribers
            .read()
            .values()
            .filter(|(user_id, _)| user_id == &event.user_id)
            .map(|(_, handler)| handler.clone())
            .collect::<Vec<_>>();

        for handler in handlers {
            handler(event.clone()).await
        }
    }
}

#[async_trait]
impl BookmarkStoreService for InMemoryBookmarkStore {
    async fn load_bookmarks(&self, user_id: &UserId) -> Result<Vec<Bookmark>> {
        let mut bookmarks = self
            .rows
            .read()
            .iter()
            .filter(|row| &row.user_id == user_id)
            .cloned()
            .collect::<Vec<_>>();
        bookmarks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookmarks)
    }

    async fn save_bookmark(&self, user_id: &UserId, title: &str, url: &Url) -> Result<Bookmark> {
        let title = title.trim();
        if title.is_empty() {
            bail!("new row for relation \"bookmarks\" violates check constraint \"title_not_empty\"")
        }

        let bookmark = Bookmark {
            id: BookmarkId::from_str(&self.id_provider.new_id())?,
            user_id: user_id.clone(),
            title: title.to_string(),
            url: url.clone(),
            created_at: self.time_provider.now(),
        };
        self.rows.write().push(bookmark.clone());

        self.publish(BookmarkChangeEvent {
            user_id: user_id.clone(),
            r#type: BookmarkChangeType::Inserted,
        })
        .await;

        Ok(bookmark)
    }

    async fn delete_bookmark(&self, id: &BookmarkId, user_id: &UserId) -> Result<()> {
        let removed = {
            let mut rows = self.rows.write();
            let len_before = rows.len();
            rows.retain(|row| !(&row.id == id && &row.user_id == user_id));
            rows.len() != len_before
        };

        // The delete is idempotent; only an actual removal hits the feed.
        if removed {
            self.publish(BookmarkChangeEvent {
                user_id: user_id.clone(),
                r#type: BookmarkChangeType::Deleted,
            })
            .await;
        }

        Ok(())
    }

    async fn subscribe_to_changes(
        &self,
        user_id: &UserId,
        handler: BookmarkChangeHandler,
    ) -> Result<Subscription> {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::SeqCst);
        self.subscribers
            .write()
            .insert(id, (user_id.clone(), handler));

        let subscribers = self.subscribers.clone();
        Ok(Subscription::new(move || {
            subscribers.write().remove(&id);
        }))
    }
}
