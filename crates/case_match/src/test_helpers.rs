//! Test helpers shared by the unit tests.
//!
//! `Counter` records how often an action ran; `Shape`/`Square` model a
//! derived type for `of_type` dispatch.

use std::any::{Any, TypeId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::Instance;

/// Shared hit counter for side-effecting actions.
#[derive(Clone, Debug, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times an action built by this counter has run.
    pub fn hits(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// An action that bumps the counter and returns `result`.
    pub fn action<S, T>(&self, result: T) -> impl Fn(&S) -> T + Send + Sync + 'static
    where
        S: ?Sized + 'static,
        T: Clone + Send + Sync + 'static,
    {
        let hits = Arc::clone(&self.0);
        move |_: &S| {
            hits.fetch_add(1, Ordering::SeqCst);
            result.clone()
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Shape {
    pub sides: u32,
}

crate::impl_instance!(Shape);

/// Derives from `Shape` by embedding it.
#[derive(Debug, PartialEq)]
pub struct Square {
    pub shape: Shape,
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Square {
            shape: Shape { sides: 4 },
            side,
        }
    }
}

impl Instance for Square {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn view(&self, target: TypeId) -> Option<&dyn Any> {
        if target == TypeId::of::<Self>() {
            Some(self)
        } else {
            self.shape.view(target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counter_counts_action_calls() {
        let counter = Counter::new();
        let action = counter.action::<i32, _>("hit");
        assert_eq!(counter.hits(), 0);
        assert_eq!(action(&1), "hit");
        assert_eq!(action(&2), "hit");
        assert_eq!(counter.hits(), 2);
    }

    #[test]
    fn test_counter_clones_share_hits() {
        let counter = Counter::new();
        let clone = counter.clone();
        let action = clone.action::<str, _>(());
        action("x");
        assert_eq!(counter.hits(), 1);
    }
}
