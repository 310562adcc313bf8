//! Bounded LIFO stack with status signalling.

use super::limits::CONTAINER_CAPACITY;
use super::{ContainerError, Status};

/// A capacity-5 stack of opaque string values.
///
/// Besides the contents, the caller can observe the size, the top element,
/// the last value pushed, the last value popped, and a message describing
/// the most recent operation.
#[derive(Debug, Default)]
pub struct BoundedStack {
    items: Vec<String>,
    last_pushed: Option<String>,
    last_popped: Option<String>,
    status: Status,
    message: String,
}

impl BoundedStack {
    pub const CAPACITY: usize = CONTAINER_CAPACITY;

    pub fn new() -> Self {
        BoundedStack::default()
    }

    /// Push a value. Rejects empty input and pushes beyond capacity; on
    /// success returns the new size.
    pub fn push(&mut self, value: &str) -> Result<usize, ContainerError> {
        if value.is_empty() {
            return Err(self.reject(ContainerError::EmptyInput, "Please enter a value."));
        }
        if self.items.len() >= Self::CAPACITY {
            return Err(self.reject(ContainerError::Overflow, "Stack Overflow"));
        }

        self.items.push(value.to_string());
        self.last_pushed = Some(value.to_string());
        self.status = Status::Ok;
        self.message = format!("Item {} is pushed.", value);
        Ok(self.items.len())
    }

    /// Pop the most recently pushed value. Rejects pops on an empty stack.
    pub fn pop(&mut self) -> Result<String, ContainerError> {
        let Some(value) = self.items.pop() else {
            return Err(self.reject(ContainerError::Underflow, "Stack Underflow"));
        };

        self.last_popped = Some(value.clone());
        self.status = Status::Ok;
        self.message = format!("Item {} is popped.", value);
        Ok(value)
    }

    /// Clear contents, last-pushed/popped memory, and the status message.
    pub fn reset(&mut self) {
        *self = BoundedStack::default();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element that would be popped next.
    pub fn top(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    pub fn last_pushed(&self) -> Option<&str> {
        self.last_pushed.as_deref()
    }

    pub fn last_popped(&self) -> Option<&str> {
        self.last_popped.as_deref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Human-readable description of the most recent operation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Bottom-to-top view of the contents.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    fn reject(&mut self, error: ContainerError, message: &str) -> ContainerError {
        self.status = error.status();
        self.message = message.to_string();
        error
    }
}
