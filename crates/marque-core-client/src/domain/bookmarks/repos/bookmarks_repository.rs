// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::bookmarks::models::Bookmark;

/// The authoritative in-memory snapshot of the active user's bookmarks. The
/// snapshot is replaced wholesale by completed refreshes and is never patched
/// in place from a mutation response.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait BookmarksRepository: Send + Sync {
    /// The current snapshot in store order (newest first).
    fn get_all(&self) -> Vec<Bookmark>;

    /// Replaces the entire snapshot.
    fn replace(&self, bookmarks: Vec<Bookmark>);
}
