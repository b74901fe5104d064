//! Reducer composition utilities.
//!
//! The root composer delegates actions to slice reducers by exhaustive match;
//! what lives here is the cross-cutting piece: [`Instrumented`], a transparent
//! wrapper that logs every reduction without altering it.

use crate::action::ActionName;
use crate::effect::Effects;
use crate::reducer::Reducer;

/// Transparent instrumentation wrapper around a reducer.
///
/// When enabled, logs the action discriminator, the payload, and the
/// before/after state pair at debug level for every invocation. The wrapper
/// is purely observational: for any input state and action it returns exactly
/// what the inner reducer returns.
///
/// Gating is a runtime flag rather than a type-level choice so that store
/// construction stays monomorphic; production config simply passes
/// `enabled = false`.
///
/// # Example
///
/// ```ignore
/// let reducer = Instrumented::new(AppReducer::new(), config.debug_actions);
/// let store = Store::new(AppState::default(), reducer, environment);
/// ```
#[derive(Debug, Clone)]
pub struct Instrumented<R> {
    inner: R,
    enabled: bool,
}

impl<R> Instrumented<R> {
    /// Wrap `inner`, logging reductions when `enabled` is true.
    pub const fn new(inner: R, enabled: bool) -> Self {
        Self { inner, enabled }
    }

    /// The wrapped reducer.
    pub const fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R> Reducer for Instrumented<R>
where
    R: Reducer,
    R::State: std::fmt::Debug,
    R::Action: std::fmt::Debug + ActionName,
{
    type State = R::State;
    type Action = R::Action;
    type Environment = R::Environment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        if !self.enabled {
            return self.inner.reduce(state, action, env);
        }

        let name = action.name();
        tracing::debug!(action = name, payload = ?action, before = ?state, "reducing action");

        let effects = self.inner.reduce(state, action, env);

        tracing::debug!(
            action = name,
            after = ?state,
            effects = effects.len(),
            "action reduced"
        );

        effects
    }
}
