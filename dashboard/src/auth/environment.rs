//! Auth slice environment.

use finboard_core::{AuthApi, Navigator};
use std::sync::Arc;

/// Dependencies injected into the auth reducer's effects.
#[derive(Clone)]
pub struct AuthEnvironment {
    /// Session-facing API collaborator
    pub api: Arc<dyn AuthApi>,
    /// Router collaborator for the 401 redirect
    pub navigator: Arc<dyn Navigator>,
}

impl AuthEnvironment {
    /// Create an environment from shared collaborators.
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self { api, navigator }
    }
}

impl std::fmt::Debug for AuthEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthEnvironment").finish_non_exhaustive()
    }
}
