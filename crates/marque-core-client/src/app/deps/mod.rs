// marque-core-client/marque-core-client
//
// Copyright: 2025, Marque Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_context::{AppContext, SessionProperties};
pub use app_dependencies::*;

mod app_context;
mod app_dependencies;
