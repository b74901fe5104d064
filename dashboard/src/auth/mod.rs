//! Auth slice: session state and re-validation.
//!
//! Owns the `Empty → Loading → {LoggedIn | NotLoggedIn | Error}` session
//! lifecycle. A 401 on user-fetch is not an error state: it means there is
//! no session, and the user is routed back to the landing page.

mod actions;
mod environment;
mod reducer;
mod state;

pub use actions::AuthAction;
pub use environment::AuthEnvironment;
pub use reducer::{AuthReducer, GET_USER_KEY};
pub use state::{AuthState, AuthStatus};
