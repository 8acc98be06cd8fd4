// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod bookmarks;
pub mod events;
pub mod store;
pub mod sync;
