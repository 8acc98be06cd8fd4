// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::{AppDependencies, DynBookmarksDomainService};
use crate::app::event_handlers::{StoreEvent, StoreEventHandler};

/// Routes live-feed row changes into the sync controller. The event payload
/// is deliberately not interpreted; any change type triggers a full re-fetch.
pub struct BookmarksEventHandler {
    bookmarks_domain_service: DynBookmarksDomainService,
}

impl From<&AppDependencies> for BookmarksEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        BookmarksEventHandler {
            bookmarks_domain_service: deps.bookmarks_domain_service.clone(),
        }
    }
}

#[async_trait]
impl StoreEventHandler for BookmarksEventHandler {
    fn name(&self) -> &'static str {
        "bookmarks"
    }

    async fn handle_event(&self, event: StoreEvent) -> Result<Option<StoreEvent>> {
        match event {
            StoreEvent::Bookmarks(event) => {
                self.bookmarks_domain_service
                    .handle_remote_change(event)
                    .await?
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
