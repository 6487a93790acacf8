//! Line id generators.
//!
//! Every insertion into the cart asks the generator for a fresh id. Production uses random
//! UUIDs; tests use [`SequentialLineIds`] so expected ids can be written down.

use crate::model::LineId;
use uuid::Uuid;

/// Source of per-insertion line ids.
pub trait LineIdGenerator: Send {
    fn next_id(&mut self) -> LineId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidLineIds;

impl LineIdGenerator for UuidLineIds {
    fn next_id(&mut self) -> LineId {
        LineId::new(Uuid::new_v4().to_string())
    }
}

/// `line_1`, `line_2`, ...
#[derive(Debug, Clone)]
pub struct SequentialLineIds {
    prefix: String,
    next: u64,
}

impl SequentialLineIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialLineIds {
    fn default() -> Self {
        Self::new("line")
    }
}

impl LineIdGenerator for SequentialLineIds {
    fn next_id(&mut self) -> LineId {
        let id = self.next;
        self.next += 1;
        LineId::new(format!("{}_{}", self.prefix, id))
    }
}

impl<F> LineIdGenerator for F
where
    F: FnMut() -> LineId + Send,
{
    fn next_id(&mut self) -> LineId {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_count_up() {
        let mut ids = SequentialLineIds::new("t");
        assert_eq!(ids.next_id().as_str(), "t_1");
        assert_eq!(ids.next_id().as_str(), "t_2");
    }

    #[test]
    fn test_uuid_ids_differ() {
        let mut ids = UuidLineIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }
}
