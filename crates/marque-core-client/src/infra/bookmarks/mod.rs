// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_bookmarks_repository::InMemoryBookmarksRepository;

mod in_memory_bookmarks_repository;
