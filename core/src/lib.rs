//! # Finboard Core
//!
//! Core traits and types for the Finboard state-synchronization architecture.
//!
//! This crate provides the fundamental abstractions for keeping a normalized,
//! observable application state consistent with an asynchronous, fallible
//! remote API using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a slice (auth, finance)
//! - **Action**: All possible inputs to a reducer (intents and async outcomes)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use finboard_core::*;
//!
//! impl Reducer for AuthReducer {
//!     type State = AuthState;
//!     type Action = AuthAction;
//!     type Environment = AuthEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut AuthState,
//!         action: AuthAction,
//!         env: &AuthEnvironment,
//!     ) -> Effects<AuthAction> {
//!         // Business logic goes here
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

pub mod api;
pub mod composition;
pub mod entities;
pub mod error;
pub mod navigation;

/// Action module - common behavior shared by all action types.
///
/// Actions represent all possible state transitions in the system. They unify
/// user/runtime intents (requests to do something) and asynchronous outcomes
/// (facts about what happened). Every asynchronous operation is described by
/// a triplet of distinct variants: intent, `...Ok` carrying the result, and
/// `...Error` carrying the failure.
pub mod action {
    /// Stable, human-readable discriminator for an action.
    ///
    /// Used by the instrumentation wrapper (see [`crate::composition::Instrumented`])
    /// to log which action is being reduced without dumping the payload twice.
    /// Names follow the `"[Slice] verb noun"` convention, e.g.
    /// `"[Auth] get user ok"`.
    pub trait ActionName {
        /// The discriminator string for this action value.
        fn name(&self) -> &'static str;
    }
}

/// Reducer module - the core trait for slice business logic.
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They are synchronous, free of I/O, and deterministic: replaying the same
/// action sequence from the same initial state always yields the same final
/// state. All I/O lives in the effects a reducer returns.
pub mod reducer {
    use super::effect::Effects;

    /// The Reducer trait - core abstraction for slice logic.
    ///
    /// # Type Parameters
    ///
    /// - `State`: The slice state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Purity
    ///
    /// `reduce` must not perform I/O or observe ambient mutable state. The
    /// environment is only captured into returned effect futures; the reducer
    /// body itself stays deterministic.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects.
        ///
        /// 1. Folds the action into `state` in place
        /// 2. Returns effect descriptions to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Effects<Self::Action>;
    }
}

/// Effect module - side effect descriptions.
///
/// Effects describe side effects to be performed by the runtime. They are
/// values (not execution), composable, and cancellable. Reducers return them;
/// the Store executes them and feeds produced actions back into the pipeline.
pub mod effect {
    use smallvec::SmallVec;
    use std::future::Future;
    use std::pin::Pin;

    /// The effect list returned by a reducer.
    ///
    /// Most reducer arms return zero or one effect; four slots keeps the
    /// common case off the heap.
    pub type Effects<Action> = SmallVec<[Effect<Action>; 4]>;

    /// A boxed future resolving to an optional follow-up action.
    pub type ActionFuture<Action> = Pin<Box<dyn Future<Output = Option<Action>> + Send>>;

    /// Key identifying a logical in-flight operation for switch-latest
    /// cancellation.
    ///
    /// Two [`Effect::Cancellable`] effects with the same key supersede each
    /// other: dispatching the second aborts the first's in-flight work and
    /// discards its result. Keys are per operation, not per payload
    /// (re-fetching transactions for a different wallet still cancels the
    /// previous transactions fetch).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CancelKey(&'static str);

    impl CancelKey {
        /// Create a cancellation key from a stable operation name.
        #[must_use]
        pub const fn new(name: &'static str) -> Self {
            Self(name)
        }

        /// The operation name this key was created from.
        #[must_use]
        pub const fn as_str(self) -> &'static str {
            self.0
        }
    }

    impl std::fmt::Display for CancelKey {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    /// Effect type - describes a side effect to be executed.
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Concurrency semantics
    ///
    /// - [`Effect::Parallel`] is the merge strategy: all effects run
    ///   concurrently and each completion independently dispatches its own
    ///   follow-up, with no ordering between interleaved completions.
    /// - [`Effect::Cancellable`] is the switch-latest strategy: only the most
    ///   recently dispatched effect for a given [`CancelKey`] may dispatch its
    ///   result; earlier in-flight effects are aborted.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects concurrently (merge semantics)
        Parallel(Vec<Effect<Action>>),

        /// Run effects in order, waiting for each to complete
        Sequential(Vec<Effect<Action>>),

        /// Arbitrary async computation.
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into
        /// the reducer pipeline.
        Future(ActionFuture<Action>),

        /// Async computation with switch-latest semantics.
        ///
        /// Dispatching a new cancellable effect for the same `key` aborts the
        /// previous in-flight one; a stale completion never dispatches.
        Cancellable {
            /// Logical operation identity used to match superseding requests
            key: CancelKey,
            /// The computation to run
            future: ActionFuture<Action>,
        },
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
                Effect::Cancellable { key, .. } => f
                    .debug_struct("Effect::Cancellable")
                    .field("key", key)
                    .finish_non_exhaustive(),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run concurrently (merge semantics)
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// An effect that immediately dispatches `action`.
        ///
        /// Used for follow-up chains where reducing one action must re-enter
        /// the pipeline with another (e.g. a successful sync triggering a
        /// re-fetch).
        #[must_use]
        pub fn dispatch(action: Action) -> Effect<Action>
        where
            Action: Send + 'static,
        {
            Effect::Future(Box::pin(std::future::ready(Some(action))))
        }

        /// Lift this effect into a parent action type.
        ///
        /// This is how slice effects are embedded into the root action stream:
        /// the composer maps every `Effect<AuthAction>` through
        /// `AppAction::Auth` before handing it to the runtime. Cancellation
        /// keys are preserved, so switch-latest semantics survive lifting.
        #[must_use]
        pub fn map<Parent, F>(self, f: F) -> Effect<Parent>
        where
            F: Fn(Action) -> Parent + Clone + Send + 'static,
            Action: 'static,
            Parent: 'static,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Parallel(effects) => {
                    Effect::Parallel(effects.into_iter().map(|e| e.map(f.clone())).collect())
                },
                Effect::Sequential(effects) => {
                    Effect::Sequential(effects.into_iter().map(|e| e.map(f.clone())).collect())
                },
                Effect::Future(future) => {
                    Effect::Future(Box::pin(async move { future.await.map(f) }))
                },
                Effect::Cancellable { key, future } => Effect::Cancellable {
                    key,
                    future: Box::pin(async move { future.await.map(f) }),
                },
            }
        }
    }
}

pub use action::ActionName;
pub use api::{AuthApi, WalletApi};
pub use effect::{CancelKey, Effect, Effects};
pub use error::ApiError;
pub use navigation::{Navigator, Route};
pub use reducer::Reducer;

#[cfg(test)]
mod tests {
    use super::effect::{CancelKey, Effect};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Child {
        Done(u32),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Parent {
        Child(Child),
    }

    #[tokio::test]
    async fn map_lifts_future_output() {
        let effect = Effect::dispatch(Child::Done(7)).map(Parent::Child);

        let Effect::Future(future) = effect else {
            unreachable!("dispatch builds a Future effect");
        };
        assert_eq!(future.await, Some(Parent::Child(Child::Done(7))));
    }

    #[tokio::test]
    async fn map_preserves_cancellation_key() {
        let key = CancelKey::new("test/op");
        let effect = Effect::Cancellable {
            key,
            future: Box::pin(std::future::ready(Some(Child::Done(1)))),
        }
        .map(Parent::Child);

        let Effect::Cancellable { key: mapped, future } = effect else {
            unreachable!("map keeps the Cancellable variant");
        };
        assert_eq!(mapped, key);
        assert_eq!(future.await, Some(Parent::Child(Child::Done(1))));
    }

    #[test]
    fn map_recurses_into_parallel() {
        let effect: Effect<Child> =
            Effect::Parallel(vec![Effect::None, Effect::dispatch(Child::Done(2))]);
        let mapped = effect.map(Parent::Child);

        let Effect::Parallel(children) = mapped else {
            unreachable!("map keeps the Parallel variant");
        };
        assert_eq!(children.len(), 2);
    }
}
