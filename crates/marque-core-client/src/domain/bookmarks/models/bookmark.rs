// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::shared::models::{BookmarkId, UserId};

/// One saved link, as persisted by the remote store. Rows are never updated
/// in place; they are created and deleted only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Store-assigned identifier.
    pub id: BookmarkId,
    /// The owning user. A bookmark is visible to its owner only; the store
    /// enforces this, not the client.
    pub user_id: UserId,
    /// Non-empty trimmed text.
    pub title: String,
    /// Absolute URL.
    pub url: Url,
    /// Store-assigned creation timestamp. Collections are ordered newest-first
    /// on this field.
    pub created_at: DateTime<Utc>,
}
