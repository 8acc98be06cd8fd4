// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bookmark::Bookmark;
pub use bookmark_change_event::{BookmarkChangeEvent, BookmarkChangeType};
pub use create_bookmark_request::{CreateBookmarkRequest, ValidationError};
pub use sync_state::SyncState;

mod bookmark;
mod bookmark_change_event;
mod create_bookmark_request;
mod sync_state;
