//! The per-variable current domain.
//!
//! Unlike the teacher lineage's persistent [`im`](https://docs.rs/im)-backed
//! domains, a domain here is mutated in place: the search driver and the
//! inference engines remove and (on backtrack) re-insert values directly, and
//! never clone the surrounding `Assignment` to take a step. A `BTreeSet` gives
//! deterministic, value-order iteration so that heuristic tie-breaks (first
//! unassigned, LCV's stable insertion) are reproducible across runs.

use std::collections::BTreeSet;

use crate::solver::value::Value;

/// The current set of candidate values for one variable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domain(BTreeSet<Value>);

impl Domain {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self(values.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    /// Removes `value`, returning whether it was present.
    pub fn remove(&mut self, value: &Value) -> bool {
        self.0.remove(value)
    }

    /// Re-inserts `value` (used to undo a prior `remove` on backtrack).
    pub fn insert(&mut self, value: Value) {
        self.0.insert(value);
    }

    /// Deterministic iteration order (`Value`'s natural order).
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    /// The single remaining value, if the domain has exactly one.
    pub fn singleton_value(&self) -> Option<&Value> {
        if self.0.len() == 1 {
            self.0.iter().next()
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a Domain {
    type Item = &'a Value;
    type IntoIter = std::collections::btree_set::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_order_is_value_order_regardless_of_insertion_order() {
        let _ = tracing_subscriber::fmt::try_init();
        let domain = Domain::new([Value::Int(3), Value::Int(1), Value::Int(2)]);
        let values: Vec<_> = domain.iter().cloned().collect();
        assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn remove_then_insert_restores_membership() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut domain = Domain::new([Value::Int(1), Value::Int(2)]);
        assert!(domain.remove(&Value::Int(1)));
        assert!(!domain.contains(&Value::Int(1)));
        domain.insert(Value::Int(1));
        assert!(domain.contains(&Value::Int(1)));
        assert_eq!(domain.len(), 2);
    }

    #[test]
    fn singleton_value_only_when_exactly_one_element() {
        let _ = tracing_subscriber::fmt::try_init();
        let single = Domain::new([Value::Int(7)]);
        assert_eq!(single.singleton_value(), Some(&Value::Int(7)));

        let pair = Domain::new([Value::Int(7), Value::Int(8)]);
        assert_eq!(pair.singleton_value(), None);

        let empty = Domain::new([]);
        assert_eq!(empty.singleton_value(), None);
    }
}
