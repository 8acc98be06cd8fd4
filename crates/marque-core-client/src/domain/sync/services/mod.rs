// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use tab_sync_service::{TabSignalHandler, TabSyncService};

mod tab_sync_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::tab_sync_service::MockTabSyncService;
}
