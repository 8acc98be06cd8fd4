// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::app::deps::{AppDependencies, DynBookmarksDomainService, DynBookmarksRepository};
use crate::dtos::{Bookmark, BookmarkId, CreateBookmarkRequest, SyncState};

pub struct BookmarksService {
    bookmarks_domain_service: DynBookmarksDomainService,
    bookmarks_repo: DynBookmarksRepository,
}

impl From<&AppDependencies> for BookmarksService {
    fn from(deps: &AppDependencies) -> Self {
        BookmarksService {
            bookmarks_domain_service: deps.bookmarks_domain_service.clone(),
            bookmarks_repo: deps.bookmarks_repo.clone(),
        }
    }
}

impl BookmarksService {
    /// The authoritative snapshot, newest first.
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.bookmarks_repo.get_all()
    }

    /// Case-insensitive substring match over title and URL. An empty or
    /// whitespace-only query returns the full snapshot.
    pub fn search_bookmarks(&self, query: &str) -> Vec<Bookmark> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.bookmarks();
        }

        self.bookmarks_repo
            .get_all()
            .into_iter()
            .filter(|bookmark| {
                bookmark.title.to_lowercase().contains(&query)
                    || bookmark.url.as_str().to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn sync_state(&self) -> SyncState {
        self.bookmarks_domain_service.sync_state()
    }

    pub async fn create_bookmark(&self, request: CreateBookmarkRequest) -> Result<Bookmark> {
        self.bookmarks_domain_service
            .create_bookmark(request.title(), request.url())
            .await
    }

    pub async fn delete_bookmark(&self, id: &BookmarkId) -> Result<()> {
        self.bookmarks_domain_service.delete_bookmark(id).await
    }

    pub async fn refresh_bookmarks(&self) -> Result<()> {
        self.bookmarks_domain_service.refresh_bookmarks().await
    }
}
