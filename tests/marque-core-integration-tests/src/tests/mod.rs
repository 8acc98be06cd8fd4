// marque-core-client/marque-core-integration-tests
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

mod bookmarks_event_handler;
mod bookmarks_service;
mod client;
mod session_service;
mod tab_sync_event_handler;
