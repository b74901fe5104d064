//! Finance slice environment.

use finboard_core::{AuthApi, Navigator, WalletApi};
use std::sync::Arc;

/// Dependencies injected into the finance reducer's effects.
///
/// The file-passwords write goes through the session-facing collaborator,
/// so the slice holds both API handles.
#[derive(Clone)]
pub struct FinanceEnvironment {
    /// Wallet-facing API collaborator
    pub api: Arc<dyn WalletApi>,
    /// Session-facing API collaborator (file passwords)
    pub auth_api: Arc<dyn AuthApi>,
    /// Router collaborator for the post-write redirects
    pub navigator: Arc<dyn Navigator>,
}

impl FinanceEnvironment {
    /// Create an environment from shared collaborators.
    #[must_use]
    pub fn new(
        api: Arc<dyn WalletApi>,
        auth_api: Arc<dyn AuthApi>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            auth_api,
            navigator,
        }
    }
}

impl std::fmt::Debug for FinanceEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceEnvironment").finish_non_exhaustive()
    }
}
