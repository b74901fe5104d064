//! # Finboard Dashboard
//!
//! State-synchronization core for a personal-finance dashboard.
//!
//! The application is a unidirectional action → reducer → effect pipeline:
//! UI intents and lifecycle signals enter as actions, reducers fold them
//! synchronously into the state tree, and effects perform the remote calls,
//! feeding results back as `...Ok` / `...Error` actions.
//!
//! ## Slices
//!
//! - [`auth`]: session state (`Empty → Loading → LoggedIn | NotLoggedIn | Error`)
//! - [`finance`]: wallets, transactions, categories, metrics
//! - [`app`]: the root composer combining both slices, including the one
//!   cross-slice chain (login success triggers the wallets fetch)
//!
//! ## Example
//!
//! ```ignore
//! use finboard_dashboard::app::{AppAction, AppReducer, AppState};
//! use finboard_dashboard::auth::AuthAction;
//! use finboard_runtime::Store;
//!
//! let store = Store::new(AppState::default(), AppReducer::new(), environment);
//! store.send(AppAction::Auth(AuthAction::GetUser)).await?;
//! let logged_in = store.state(|s| s.auth.is_logged_in()).await;
//! ```

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod finance;
pub mod session;
