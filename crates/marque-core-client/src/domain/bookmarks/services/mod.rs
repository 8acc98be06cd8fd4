// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bookmark_store_service::{BookmarkChangeHandler, BookmarkStoreService};
pub use bookmarks_domain_service::BookmarksDomainService;

mod bookmark_store_service;
mod bookmarks_domain_service;

pub mod impls;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::bookmark_store_service::MockBookmarkStoreService;
    pub use super::bookmarks_domain_service::MockBookmarksDomainService;
}
