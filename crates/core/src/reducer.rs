//! Reducer trait for state that evolves by whole-value replacement.

/// Pure state transition.
///
/// A reducer never mutates `self`: it returns the successor state for an
/// action, so a reader holding the previous value can never observe a
/// half-applied transition.
///
/// - **Decision + evolution**: `reduce(&self, action)` returns the next state.
/// - **Replay**: `reduce_all` folds a sequence of actions from a starting state.
pub trait Reducer: Sized + Clone {
    type Action: core::fmt::Debug;

    /// Compute the state that follows `self` after `action`.
    fn reduce(&self, action: &Self::Action) -> Self;

    /// Fold a sequence of actions, left to right.
    fn reduce_all<'a, I>(&self, actions: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self::Action: 'a,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.reduce(action))
    }
}
