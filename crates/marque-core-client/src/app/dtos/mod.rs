// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::bookmarks::models::{
    Bookmark, BookmarkChangeEvent, BookmarkChangeType, CreateBookmarkRequest, SyncState,
    ValidationError,
};
pub use crate::domain::shared::models::{BookmarkId, Subscription, UserId};
pub use crate::domain::sync::models::{TabSignal, TAB_SYNC_CHANNEL};
