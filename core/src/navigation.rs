//! Navigation collaborator.
//!
//! The routing table itself is external; the core only needs to ask for a
//! route change as a terminal, non-dispatching side effect (401 on
//! user-fetch sends the user to the root route, a created category sends
//! them back to the dashboard).

/// The routes the state core can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing / login route (`/`)
    Root,
    /// Main dashboard route (`/dashboard`)
    Dashboard,
}

impl Route {
    /// The path rendered for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Dashboard => "/dashboard",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Router abstraction injected into slice environments.
///
/// Implementations must be cheap and non-blocking; effects call this from
/// async tasks and never await a result. The test implementation simply
/// records requested routes.
pub trait Navigator: Send + Sync {
    /// Request navigation to `route`.
    fn navigate(&self, route: Route);
}
