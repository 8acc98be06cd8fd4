// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::bookmarks::models::Bookmark;
use crate::domain::bookmarks::repos::BookmarksRepository;

pub struct InMemoryBookmarksRepository {
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl InMemoryBookmarksRepository {
    pub fn new() -> Self {
        InMemoryBookmarksRepository {
            bookmarks: Default::default(),
        }
    }
}

impl BookmarksRepository for InMemoryBookmarksRepository {
    fn get_all(&self) -> Vec<Bookmark> {
        self.bookmarks.read().clone()
    }

    fn replace(&self, bookmarks: Vec<Bookmark>) {
        *self.bookmarks.write() = bookmarks;
    }
}
