// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bookmarks_domain_service::{BookmarksDomainService, BookmarksDomainServiceDependencies};

mod bookmarks_domain_service;
