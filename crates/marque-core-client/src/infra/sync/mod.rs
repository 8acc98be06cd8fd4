// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use local_tab_sync_channel::{LocalTabSyncChannel, LocalTabSyncHub};
pub use noop_tab_sync_channel::NoopTabSyncChannel;

mod local_tab_sync_channel;
mod noop_tab_sync_channel;
