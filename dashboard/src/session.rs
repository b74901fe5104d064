//! Session revalidation on window signals.
//!
//! The host shell forwards focus/visibility signals over a channel; each
//! focus or newly-visible signal re-dispatches the session fetch so a
//! returning user is revalidated. The fetch is cancellable, so a burst of
//! signals collapses to the latest request.

use crate::app::{AppAction, AppEnvironment, AppState};
use crate::auth::AuthAction;
use finboard_core::Reducer;
use finboard_runtime::Store;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A host-shell signal relevant to session freshness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// The window regained focus
    WindowFocused,
    /// The tab became visible
    TabVisible,
    /// The tab was hidden. Ignored: hiding never triggers work.
    TabHidden,
}

/// Watch host-shell signals and revalidate the session on each wake-up.
///
/// Runs until the signal channel closes or the store shuts down.
pub fn spawn_session_watch<R>(
    store: Store<AppState, AppAction, AppEnvironment, R>,
    mut signals: mpsc::Receiver<SessionSignal>,
) -> JoinHandle<()>
where
    R: Reducer<State = AppState, Action = AppAction, Environment = AppEnvironment>
        + Clone
        + Send
        + Sync
        + 'static,
{
    tokio::spawn(async move {
        while let Some(signal) = signals.recv().await {
            match signal {
                SessionSignal::WindowFocused | SessionSignal::TabVisible => {
                    tracing::debug!(?signal, "revalidating session");
                    if store
                        .send(AppAction::Auth(AuthAction::GetUser))
                        .await
                        .is_err()
                    {
                        // Store is shutting down; nothing left to watch.
                        break;
                    }
                }
                SessionSignal::TabHidden => {}
            }
        }
        tracing::debug!("session watch stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppReducer;
    use crate::auth::{AuthEnvironment, AuthStatus};
    use crate::finance::FinanceEnvironment;
    use finboard_testing::mocks::{MockAuthApi, MockWalletApi, RecordingNavigator};
    use finboard_testing::fixtures;
    use std::sync::Arc;
    use std::time::Duration;

    fn env_with_auth(auth_api: Arc<MockAuthApi>) -> AppEnvironment {
        let navigator = Arc::new(RecordingNavigator::new());
        AppEnvironment::new(
            AuthEnvironment::new(Arc::clone(&auth_api) as _, Arc::clone(&navigator) as _),
            FinanceEnvironment::new(Arc::new(MockWalletApi::new()), auth_api, navigator),
        )
    }

    #[tokio::test]
    async fn focus_signal_revalidates_the_session() {
        let auth_api = Arc::new(MockAuthApi::new().with_user(fixtures::user(vec![])));
        let store = Store::new(
            AppState::default(),
            AppReducer::new(),
            env_with_auth(auth_api),
        );
        let (tx, rx) = mpsc::channel(4);
        let watch = spawn_session_watch(store.clone(), rx);

        let mut actions = store.subscribe_actions();
        tx.send(SessionSignal::WindowFocused)
            .await
            .unwrap_or_else(|_| unreachable!("watch task holds the receiver"));

        // Wait for the fetch completion to come back through the store.
        let completion = tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                match actions.recv().await {
                    Ok(AppAction::Auth(AuthAction::GetUserOk { .. })) => break true,
                    Ok(_) => {}
                    Err(_) => break false,
                }
            }
        })
        .await;
        assert_eq!(completion, Ok(true));

        let logged_in = store.state(|s| s.auth.status == AuthStatus::LoggedIn).await;
        assert!(logged_in);

        drop(tx);
        let _ = watch.await;
    }

    #[tokio::test]
    async fn hidden_signal_is_ignored() {
        let auth_api = Arc::new(MockAuthApi::new());
        let store = Store::new(
            AppState::default(),
            AppReducer::new(),
            env_with_auth(Arc::clone(&auth_api)),
        );
        let (tx, rx) = mpsc::channel(4);
        let watch = spawn_session_watch(store.clone(), rx);

        tx.send(SessionSignal::TabHidden)
            .await
            .unwrap_or_else(|_| unreachable!("watch task holds the receiver"));
        drop(tx);
        let _ = watch.await;

        assert!(auth_api.calls().is_empty());
        let untouched = store.state(|s| s.auth.status == AuthStatus::Empty).await;
        assert!(untouched);
    }

    #[tokio::test]
    async fn watch_stops_when_the_channel_closes() {
        let store = Store::new(
            AppState::default(),
            AppReducer::new(),
            env_with_auth(Arc::new(MockAuthApi::new())),
        );
        let (tx, rx) = mpsc::channel::<SessionSignal>(1);
        let watch = spawn_session_watch(store, rx);

        drop(tx);
        let finished = tokio::time::timeout(Duration::from_secs(1), watch).await;
        assert!(finished.is_ok());
    }
}
