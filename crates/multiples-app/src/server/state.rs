use std::sync::Arc;

use crate::services::CalculatorService;
use crate::{Config, MultiplesApp};

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    app: MultiplesApp,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                app: MultiplesApp::new(config),
            }),
        }
    }

    pub fn config(&self) -> &Config {
        self.inner.app.config()
    }

    pub fn calculator(&self) -> &CalculatorService {
        self.inner.app.calculator()
    }
}
