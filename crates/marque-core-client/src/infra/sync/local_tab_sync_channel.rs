// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::shared::models::Subscription;
use crate::domain::sync::models::TabSignal;
use crate::domain::sync::services::{TabSignalHandler, TabSyncService};

type ChannelSubscribers = Arc<RwLock<HashMap<String, HashMap<u64, (u64, TabSignalHandler)>>>>;

/// In-process stand-in for the origin-wide broadcast surface: every channel
/// handed out by the same hub with the same name reaches the same listeners.
/// One hub models one origin.
#[derive(Clone, Default)]
pub struct LocalTabSyncHub {
    subscribers: ChannelSubscribers,
    next_subscriber_id: Arc<AtomicU64>,
}

impl LocalTabSyncHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&self, name: impl Into<String>) -> LocalTabSyncChannel {
        LocalTabSyncChannel {
            name: name.into(),
            channel_id: self.next_subscriber_id.fetch_add(1, Ordering::SeqCst),
            subscribers: self.subscribers.clone(),
            next_subscriber_id: self.next_subscriber_id.clone(),
        }
    }
}

pub struct LocalTabSyncChannel {
    name: String,
    /// Distinguishes this handle from its siblings so a broadcast skips
    /// subscriptions made through the broadcasting handle itself.
    channel_id: u64,
    subscribers: ChannelSubscribers,
    next_subscriber_id: Arc<AtomicU64>,
}

#[async_trait]
impl TabSyncService for LocalTabSyncChannel {
    async fn broadcast(&self, signal: TabSignal) {
        let handlers = self
            .subscribers
            .read()
            .get(&self.name)
            .map(|subscribers| {
                subscribers
                    .values()
                    .filter(|(channel_id, _)| channel_id != &self.channel_id)
                    .map(|(_, handler)| handler.clone())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        for handler in handlers {
            handler(signal.clone()).await
        }
    }

    fn subscribe(&self, handler: TabSignalHandler) -> Result<Subscription> {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::SeqCst);
        self.subscribers
            .write()
            .entry(self.name.clone())
            .or_default()
            .insert(id, (self.channel_id, handler));

        let subscribers = self.subscribers.clone();
        let name = self.name.clone();
        Ok(Subscription::new(move || {
            if let Some(channel) = subscribers.write().get_mut(&name) {
                channel.remove(&id);
            }
        }))
    }
}
