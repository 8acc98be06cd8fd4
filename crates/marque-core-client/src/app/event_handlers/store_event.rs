// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::bookmarks::models::BookmarkChangeEvent;
use crate::domain::sync::models::TabSignal;

/// An inbound event from one of the long-lived listeners. Every variant is a
/// refresh trigger; none carries enough payload to patch the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A row-level change on the live feed.
    Bookmarks(BookmarkChangeEvent),
    /// A signal on the cross-tab channel.
    TabSync(TabSignal),
}
