// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use anyhow::Result;

use crate::app::deps::DynAppContext;
use crate::client_builder::{ClientBuilder, UndefinedStore};
use crate::domain::shared::models::UserId;
use crate::app::services::{BookmarksService, SessionService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedStore> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub bookmarks: BookmarksService,
    pub(crate) ctx: DynAppContext,
    pub(crate) session: SessionService,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub async fn connect(&self, user_id: &UserId) -> Result<()> {
        self.session.connect(user_id).await
    }

    pub async fn disconnect(&self) {
        self.session.disconnect().await
    }

    pub fn connected_user_id(&self) -> Option<UserId> {
        self.ctx.active_user_id()
    }
}
