// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The sign-in session was established or torn down.
    SessionStatusChanged { event: SessionEvent },

    /// The bookmark snapshot was replaced.
    BookmarksChanged,

    /// One of the pending-operation flags (loading, creating, deleting)
    /// changed.
    SyncStateChanged,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Connect,
    Disconnect,
}
