// User-facing input limits, preserved exactly for compatibility.

/// Fixed capacity of the bounded stack and queue demos.
pub const CONTAINER_CAPACITY: usize = 5;

/// Smallest accepted array size for the indexed-access demo.
pub const MIN_ARRAY_SIZE: usize = 1;

/// Largest accepted array size for the indexed-access demo.
pub const MAX_ARRAY_SIZE: usize = 20;

/// Longest accepted string for the character-access demo.
pub const MAX_STRING_LENGTH: usize = 30;
