// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use parking_lot::RwLock;

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionProperties {
    pub user_id: UserId,
}

pub struct AppContext {
    pub session_properties: RwLock<Option<SessionProperties>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session_properties: Default::default(),
        }
    }
}

impl AppContext {
    pub fn active_user_id(&self) -> Option<UserId> {
        self.session_properties
            .read()
            .as_ref()
            .map(|p| p.user_id.clone())
    }

    pub fn active_user_id_or_err(&self) -> Result<UserId> {
        self.active_user_id().ok_or(anyhow::anyhow!(
            "Failed to read the user's id since the client is not signed in."
        ))
    }
}

impl AppContext {
    pub fn set_session_properties(&self, properties: SessionProperties) {
        self.session_properties.write().replace(properties);
    }

    pub fn reset_session_properties(&self) {
        self.session_properties.write().take();
    }
}
