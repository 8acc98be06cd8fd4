// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::domain::shared::models::Subscription;
use crate::domain::sync::models::TabSignal;

pub type TabSignalHandler = Arc<dyn Fn(TabSignal) -> BoxFuture<'static, ()> + Send + Sync>;

/// Same-origin broadcast channel between tabs. Cross-tab sync is a
/// best-effort enhancement, not a correctness requirement: in environments
/// without a channel both operations degrade to silent no-ops.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TabSyncService: Send + Sync {
    /// Posts a signal to every other listener on the channel. Fire-and-forget.
    async fn broadcast(&self, signal: TabSignal);

    /// Receives every signal posted to the channel, including signals for
    /// other users; filtering against the active session is the caller's job.
    fn subscribe(&self, handler: TabSignalHandler) -> Result<Subscription>;
}
