// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::error;

use crate::app::event_handlers::{StoreEvent, StoreEventHandler};

/// The single serialized entry point for all refresh triggers. Handlers run
/// in registration order until one consumes the event; handler failures are
/// logged and never propagate to the event source.
pub struct StoreEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn StoreEventHandler>>>,
}

impl StoreEventHandlerQueue {
    pub fn new() -> Self {
        Self {
            handlers: Default::default(),
        }
    }

    pub(crate) fn set_handlers(&self, handlers: Vec<Box<dyn StoreEventHandler>>) {
        self.handlers
            .set(handlers)
            .map_err(|_| ())
            .expect("Tried to set handlers on StoreEventHandlerQueue more than once");
    }

    pub async fn handle_event(&self, event: StoreEvent) {
        let mut event = event;
        let handlers = self
            .handlers
            .get()
            .expect("Handlers were not set in StoreEventHandlerQueue");

        for handler in handlers.iter() {
            match handler.handle_event(event).await {
                Ok(None) => return,
                Ok(Some(e)) => event = e,
                Err(err) => {
                    error!(
                        "Event handler '{}' aborted with error: {}",
                        handler.name(),
                        err.to_string()
                    );
                    return;
                }
            }
        }
    }
}
