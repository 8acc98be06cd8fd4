// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bookmarks_repository::BookmarksRepository;

mod bookmarks_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::bookmarks_repository::MockBookmarksRepository;
}
