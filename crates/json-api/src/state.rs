//! Shared handler state.

use std::sync::Arc;

use catalog_app::context::AppContext;

/// Injected into the depot once at startup; handlers reach the product
/// service and the mailer through it.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
