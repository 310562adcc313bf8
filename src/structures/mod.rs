//! Linear structures and bounded-input demos
//!
//! - [`stack`] / [`queue`]: capacity-5 containers with overflow/underflow
//!   signalling and a human-readable status message after every operation
//! - [`list`]: ordered-list editor with positional insert/delete
//! - [`access`]: array/string indexed access with size validation
//! - [`limits`]: the user-facing numeric bounds, kept in one place
//!
//! Failed operations never change state: every error degrades to "nothing
//! happened" plus a status the caller can read, and re-invoking after
//! correcting the input is always safe.

pub mod access;
pub mod limits;
pub mod list;
pub mod queue;
pub mod stack;

pub use queue::BoundedQueue;
pub use stack::BoundedStack;

use std::fmt;

/// Classification of the most recent container operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// The operation succeeded (also the initial state).
    #[default]
    Ok,
    /// Insert rejected: the container is at capacity.
    Overflow,
    /// Removal rejected: the container is empty.
    Underflow,
    /// Insert rejected: no value was supplied.
    EmptyInput,
}

/// Error returned by a rejected container operation. Carries the same
/// classification as [`Status`], minus the non-error `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    Overflow,
    Underflow,
    EmptyInput,
}

impl ContainerError {
    pub fn status(self) -> Status {
        match self {
            ContainerError::Overflow => Status::Overflow,
            ContainerError::Underflow => Status::Underflow,
            ContainerError::EmptyInput => Status::EmptyInput,
        }
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::Overflow => write!(f, "container is at capacity"),
            ContainerError::Underflow => write!(f, "container is empty"),
            ContainerError::EmptyInput => write!(f, "no value supplied"),
        }
    }
}

impl std::error::Error for ContainerError {}
