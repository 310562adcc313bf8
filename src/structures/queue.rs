//! Bounded FIFO queue with status signalling.

use std::collections::VecDeque;

use super::limits::CONTAINER_CAPACITY;
use super::{ContainerError, Status};

/// A capacity-5 queue of opaque string values. Mirrors [`BoundedStack`] but
/// removes from the front.
///
/// [`BoundedStack`]: super::BoundedStack
#[derive(Debug, Default)]
pub struct BoundedQueue {
    items: VecDeque<String>,
    last_enqueued: Option<String>,
    last_dequeued: Option<String>,
    status: Status,
    message: String,
}

impl BoundedQueue {
    pub const CAPACITY: usize = CONTAINER_CAPACITY;

    pub fn new() -> Self {
        BoundedQueue::default()
    }

    /// Enqueue a value. Rejects empty input and enqueues beyond capacity;
    /// on success returns the new size.
    pub fn enqueue(&mut self, value: &str) -> Result<usize, ContainerError> {
        if value.is_empty() {
            return Err(self.reject(ContainerError::EmptyInput, "Please enter a value."));
        }
        if self.items.len() >= Self::CAPACITY {
            return Err(self.reject(ContainerError::Overflow, "Queue Overflow"));
        }

        self.items.push_back(value.to_string());
        self.last_enqueued = Some(value.to_string());
        self.status = Status::Ok;
        self.message = format!("Item {} is enqueued.", value);
        Ok(self.items.len())
    }

    /// Dequeue the oldest value. Rejects dequeues on an empty queue.
    pub fn dequeue(&mut self) -> Result<String, ContainerError> {
        let Some(value) = self.items.pop_front() else {
            return Err(self.reject(ContainerError::Underflow, "Queue Underflow"));
        };

        self.last_dequeued = Some(value.clone());
        self.status = Status::Ok;
        self.message = format!("Item {} is dequeued.", value);
        Ok(value)
    }

    /// Clear contents, last-enqueued/dequeued memory, and the status message.
    pub fn reset(&mut self) {
        *self = BoundedQueue::default();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element that would be dequeued next.
    pub fn front(&self) -> Option<&str> {
        self.items.front().map(String::as_str)
    }

    pub fn last_enqueued(&self) -> Option<&str> {
        self.last_enqueued.as_deref()
    }

    pub fn last_dequeued(&self) -> Option<&str> {
        self.last_dequeued.as_deref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Human-readable description of the most recent operation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Front-to-back view of the contents.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    fn reject(&mut self, error: ContainerError, message: &str) -> ContainerError {
        self.status = error.status();
        self.message = message.to_string();
        error
    }
}
