use std::fmt;

use vk_core::StoreError;

/// A controller action that talks to the remote store.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Refresh,
    Create,
    Update,
    Delete,
    Provision,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Provision => "provision",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observable controller state.
///
/// ```text
/// Idle → Busy(op) → Idle   (on success, on failure, and when the call is dropped)
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ControllerState {
    #[default]
    Idle,
    Busy(Operation),
}

/// Holds the controller in [`ControllerState::Busy`] until dropped.
pub(super) struct BusyGuard<'a> {
    state: &'a mut ControllerState,
}

impl<'a> BusyGuard<'a> {
    /// Mark `state` busy with `operation`, or fail if it already is.
    pub(super) fn enter(
        state: &'a mut ControllerState,
        operation: Operation,
    ) -> Result<Self, ControllerError> {
        if let ControllerState::Busy(current) = *state {
            tracing::warn!(%current, requested = %operation, "rejected dispatch while busy");
            return Err(ControllerError::Busy(current));
        }
        *state = ControllerState::Busy(operation);
        Ok(Self { state })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.state = ControllerState::Idle;
    }
}

/// Result of a user intent that may end without touching the store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The store call was made and the list reloaded.
    Done,
    /// Nothing was selected.
    NoSelection,
    /// The edit dialog was dismissed.
    Cancelled,
    /// The delete confirmation was declined.
    Declined,
}

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// Another store call has not returned yet.
    #[error("a {0} is already in progress")]
    Busy(Operation),

    #[error(transparent)]
    Store(#[from] StoreError),
}
