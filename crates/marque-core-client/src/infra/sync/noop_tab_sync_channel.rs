// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::Subscription;
use crate::domain::sync::models::TabSignal;
use crate::domain::sync::services::{TabSignalHandler, TabSyncService};

/// Used where no broadcast surface exists. Signals are dropped and
/// subscriptions never fire; the live feed and manual refreshes keep the
/// client correct without it.
#[derive(Default)]
pub struct NoopTabSyncChannel {}

#[async_trait]
impl TabSyncService for NoopTabSyncChannel {
    async fn broadcast(&self, _signal: TabSignal) {}

    fn subscribe(&self, _handler: TabSignalHandler) -> Result<Subscription> {
        Ok(Subscription::empty())
    }
}
