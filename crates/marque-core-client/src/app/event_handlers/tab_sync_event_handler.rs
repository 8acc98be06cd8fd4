// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::{AppDependencies, DynBookmarksDomainService};
use crate::app::event_handlers::{StoreEvent, StoreEventHandler};

/// Routes cross-tab signals into the sync controller, which drops signals
/// carried for a different signed-in identity.
pub struct TabSyncEventHandler {
    bookmarks_domain_service: DynBookmarksDomainService,
}

impl From<&AppDependencies> for TabSyncEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        TabSyncEventHandler {
            bookmarks_domain_service: deps.bookmarks_domain_service.clone(),
        }
    }
}

#[async_trait]
impl StoreEventHandler for TabSyncEventHandler {
    fn name(&self) -> &'static str {
        "tab_sync"
    }

    async fn handle_event(&self, event: StoreEvent) -> Result<Option<StoreEvent>> {
        match event {
            StoreEvent::TabSync(signal) => {
                self.bookmarks_domain_service
                    .handle_tab_signal(signal)
                    .await?
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
