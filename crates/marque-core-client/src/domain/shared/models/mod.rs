// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use bookmark_id::BookmarkId;
pub use subscription::Subscription;
pub use user_id::{InvalidIdError, UserId};

mod bookmark_id;
mod subscription;
mod user_id;
