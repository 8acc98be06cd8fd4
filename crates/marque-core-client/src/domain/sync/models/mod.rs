// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use tab_signal::{TabSignal, TAB_SYNC_CHANNEL};

mod tab_signal;
