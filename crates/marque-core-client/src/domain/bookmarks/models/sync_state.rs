// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::BookmarkId;

/// Pending-operation flags for UI feedback. At most one delete is tracked at
/// a time per client instance; the store call itself is not serialized
/// against other concurrent deletes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SyncState {
    /// True while a refresh cycle is in flight.
    pub is_loading: bool,
    /// True while a local create is in flight.
    pub is_creating: bool,
    /// The id passed to the delete currently in flight, if any.
    pub deleting_id: Option<BookmarkId>,
}
