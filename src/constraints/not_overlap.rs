//! Interval non-overlap between two scheduled intervals.
//!
//! Tokens are encoded as `"<resource><start>,<end>"`, e.g. `"A9,12"`: a
//! single-character resource identifier followed by a `start,end` pair.
//! Intervals on different resources never conflict; on the same resource, a
//! shared start or end counts as overlap, not just interior overlap.
//! Grounded on `original_source/BinaryCSP.py`'s `NotOverlapConstraint`.

use crate::solver::constraint::{BinaryConstraint, VariableId};
use crate::solver::value::Value;

struct Interval {
    resource: char,
    start: f64,
    end: f64,
}

fn parse(value: &Value) -> Interval {
    let token = value.as_str().expect("interval token must be a string value");
    let mut chars = token.chars();
    let resource = chars.next().expect("interval token must not be empty");
    let rest: String = chars.collect();
    let mut parts = rest.split(',');
    let start: f64 = parts
        .next()
        .expect("interval token missing start")
        .parse()
        .expect("interval start must be numeric");
    let end: f64 = parts
        .next()
        .expect("interval token missing end")
        .parse()
        .expect("interval end must be numeric");
    Interval { resource, start, end }
}

/// `v1` and `v2` must not hold overlapping intervals on the same resource.
#[derive(Debug, Clone)]
pub struct NotOverlap {
    v1: VariableId,
    v2: VariableId,
}

impl NotOverlap {
    pub fn new(v1: impl Into<VariableId>, v2: impl Into<VariableId>) -> Self {
        Self {
            v1: v1.into(),
            v2: v2.into(),
        }
    }
}

impl BinaryConstraint for NotOverlap {
    fn variables(&self) -> (&VariableId, &VariableId) {
        (&self.v1, &self.v2)
    }

    fn affects(&self, var: &VariableId) -> bool {
        *var == self.v1 || *var == self.v2
    }

    fn other(&self, var: &VariableId) -> VariableId {
        if *var == self.v1 {
            self.v2.clone()
        } else {
            self.v1.clone()
        }
    }

    fn valid(&self, a: &Value, b: &Value) -> bool {
        let a = parse(a);
        let b = parse(b);
        if a.resource != b.resource {
            return true;
        }
        // Symmetric by construction: a shared start/end, or either interval
        // starting before the other ends, counts as overlap regardless of
        // which argument is `a` and which is `b`.
        let overlaps = a.start == b.start || a.end == b.end || (a.start < b.end && b.start < a.end);
        !overlaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn different_resources_never_conflict() {
        let _ = tracing_subscriber::fmt::try_init();
        let c = NotOverlap::new("a", "b");
        assert!(c.valid(&Value::Str("A9,12".into()), &Value::Str("B9,12".into())));
    }

    #[test]
    fn shared_start_or_end_counts_as_overlap() {
        let _ = tracing_subscriber::fmt::try_init();
        let c = NotOverlap::new("a", "b");
        assert!(!c.valid(&Value::Str("A9,12".into()), &Value::Str("A9,13".into())));
        assert!(!c.valid(&Value::Str("A9,12".into()), &Value::Str("A8,12".into())));
    }

    #[test]
    fn disjoint_intervals_on_same_resource_are_fine() {
        let _ = tracing_subscriber::fmt::try_init();
        let c = NotOverlap::new("a", "b");
        assert!(c.valid(&Value::Str("A9,10".into()), &Value::Str("A10,12".into())));
        assert!(c.valid(&Value::Str("A9,10".into()), &Value::Str("A11,12".into())));
    }

    #[test]
    fn valid_is_symmetric_in_its_arguments() {
        let _ = tracing_subscriber::fmt::try_init();
        let c = NotOverlap::new("a", "b");
        // Properly contained, no shared endpoint: still an overlap either way.
        let contained = Value::Str("A1,5".into());
        let container = Value::Str("A2,3".into());
        assert!(!c.valid(&contained, &container));
        assert!(!c.valid(&container, &contained));

        let left = Value::Str("A9,10".into());
        let right = Value::Str("A10,12".into());
        assert!(c.valid(&left, &right));
        assert!(c.valid(&right, &left));
    }
}
