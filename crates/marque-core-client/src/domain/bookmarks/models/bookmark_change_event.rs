// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

/// A row-level change notification from the store's live feed. The client
/// never interprets the payload beyond "something changed for this user" and
/// re-fetches the full collection instead of patching the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkChangeEvent {
    pub user_id: UserId,
    pub r#type: BookmarkChangeType,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BookmarkChangeType {
    Inserted,
    Updated,
    Deleted,
}
