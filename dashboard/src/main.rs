//! Dashboard shell: wires the store, fetches the session, and keeps it
//! fresh on focus signals until shut down.

use finboard_core::composition::Instrumented;
use finboard_core::{Navigator, Route};
use finboard_dashboard::api::HttpApi;
use finboard_dashboard::app::{AppAction, AppEnvironment, AppReducer, AppState};
use finboard_dashboard::auth::{AuthAction, AuthEnvironment};
use finboard_dashboard::config::Config;
use finboard_dashboard::finance::{FinanceAction, FinanceEnvironment};
use finboard_dashboard::session::spawn_session_watch;
use finboard_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Router stand-in for the headless shell: routes are logged, not rendered.
#[derive(Debug)]
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(%route, "navigate");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finboard_dashboard=debug,finboard_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(api = %config.api_base_url, "starting dashboard core");

    let api = Arc::new(HttpApi::new(config.api_base_url.clone()));
    let navigator = Arc::new(LoggingNavigator);
    let environment = AppEnvironment::new(
        AuthEnvironment::new(Arc::clone(&api) as _, Arc::clone(&navigator) as _),
        FinanceEnvironment::new(Arc::clone(&api) as _, api, navigator),
    );

    let store = Store::new(
        AppState::default(),
        Instrumented::new(AppReducer::new(), config.debug_actions),
        environment,
    );

    let (signals, signal_rx) = mpsc::channel(16);
    let watch = spawn_session_watch(store.clone(), signal_rx);

    // Boot sequence: fetch the session; a success chains into the wallets
    // and transactions fetches on its own. Wait for a terminal action of
    // that chain before reporting.
    let boot = store
        .send_and_wait_for(
            AppAction::Auth(AuthAction::GetUser),
            |action| {
                matches!(
                    action,
                    AppAction::Auth(AuthAction::GetUserError { .. })
                        | AppAction::Finance(
                            FinanceAction::GetWalletsError { .. }
                                | FinanceAction::SetSelectedWallet { wallet: None }
                                | FinanceAction::GetTransactionsOk { .. }
                                | FinanceAction::GetTransactionsError { .. },
                        )
                )
            },
            Duration::from_secs(10),
        )
        .await;
    if boot.is_err() {
        tracing::warn!("startup chain did not settle within 10s");
    }

    store
        .state(|state| {
            tracing::info!(
                logged_in = state.auth.is_logged_in(),
                wallets = state.finance.wallets.len(),
                transactions = state.finance.transactions.len(),
                "startup state"
            );
        })
        .await;

    drop(signals);
    let _ = watch.await;
    store.shutdown(Duration::from_secs(5)).await?;

    Ok(())
}
