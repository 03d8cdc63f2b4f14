//! Activity-instance identifier generation.

use uuid::Uuid;

/// Source of fresh activity-instance identifiers.
///
/// Every call must return an identifier not returned before by the same
/// generator.
pub trait InstanceIdGenerator {
    fn next_id(&mut self) -> String;
}

/// Deterministic counter: `1`, `2`, `3`, ... with an optional prefix.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl InstanceIdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("{}{}", self.prefix, self.next)
    }
}

/// Random UUID v4 identifiers, unique across logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl InstanceIdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
