// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;

/// Well-known channel name shared by every tab of the origin.
pub const TAB_SYNC_CHANNEL: &str = "bookmarks-sync";

/// Fire-and-forget "data changed for user X" broadcast between tabs. No
/// acknowledgment, no ordering guarantee beyond same-process delivery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSignal {
    pub user_id: UserId,
    /// Milliseconds since the Unix epoch, per the channel's wire contract.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}
