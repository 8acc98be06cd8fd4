// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientDelegate};
pub use client_builder::{ClientBuilder, UndefinedStore};
pub use client_event::{ClientEvent, SessionEvent};

pub use domain::bookmarks::services::{BookmarkChangeHandler, BookmarkStoreService};
pub use domain::sync::services::{TabSignalHandler, TabSyncService};
pub use infra::store::{InMemoryBookmarkStore, StoreConfig, StoreConfigError};
pub use infra::sync::{LocalTabSyncChannel, LocalTabSyncHub, NoopTabSyncChannel};
pub use util::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};


pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

pub mod dtos {
    pub use crate::app::dtos::*;
}

pub(crate) mod util;
