//! A single clause of a match: a predicate plus an action chain.
//!
//! Actions are not composed. Every action receives the original input and
//! the result of the last one is the result of the case; earlier results are
//! dropped once produced.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use crate::instance::{narrow, Instance};

/// Decides whether a case applies to a value.
pub(crate) type Predicate<'a, S> = Box<dyn Fn(&S) -> bool + Send + Sync + 'a>;

/// Produces a result from a matched value.
pub(crate) type Action<'a, S, T> = Box<dyn Fn(&S) -> T + Send + Sync + 'a>;

/// Which factory built a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseKind {
    /// Equal to a single key.
    Value,
    /// Equal to any of a set of keys.
    Values,
    /// Instance of the named type.
    Type(&'static str),
    /// Always matches.
    Else,
}

/// One clause of a match.
///
/// Built by the `matcher` factories and immutable once handed to
/// `match_value`. Always holds at least one action.
///
/// Predicates and actions are stored as `Send + Sync` closures, so every
/// `Case` is `Send + Sync` and a case list can be shared between threads
/// without locking. The flip side: closures capturing `Rc`, `Cell` or
/// `RefCell` are rejected; count with atomics or guard with a `Mutex`.
pub struct Case<'a, S: ?Sized, T> {
    kind: CaseKind,
    predicate: Predicate<'a, S>,
    first: Action<'a, S, T>,
    rest: Vec<Action<'a, S, T>>,
}

impl<'a, S: ?Sized, T> Case<'a, S, T> {
    pub(crate) fn new(
        kind: CaseKind,
        predicate: Predicate<'a, S>,
        first: Action<'a, S, T>,
    ) -> Self {
        Case {
            kind,
            predicate,
            first,
            rest: Vec::new(),
        }
    }

    /// Append another action to the chain.
    ///
    /// The new action receives the same input as every other action in the
    /// case, not the previous action's output, and its result replaces
    /// theirs.
    #[must_use]
    pub fn also<F>(mut self, action: F) -> Self
    where
        F: Fn(&S) -> T + Send + Sync + 'a,
    {
        self.rest.push(Box::new(action));
        self
    }

    /// Whether this case applies to `value`.
    #[inline]
    pub fn matches(&self, value: &S) -> bool {
        (self.predicate)(value)
    }

    /// Run every action against `value` in order and return the last result.
    pub fn result(&self, value: &S) -> T {
        let mut result = (self.first)(value);
        for action in &self.rest {
            result = action(value);
        }
        result
    }

    /// The factory that built this case.
    pub fn kind(&self) -> CaseKind {
        self.kind
    }

    /// Number of actions in the chain.
    pub fn action_count(&self) -> usize {
        1 + self.rest.len()
    }
}

impl<S: ?Sized, T> fmt::Debug for Case<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("kind", &self.kind)
            .field("actions", &self.action_count())
            .finish_non_exhaustive()
    }
}

/// A case built by `of_type::<U>`, still open for more actions over `&U`.
///
/// Every action in the chain receives the matched value narrowed to `&U`,
/// so a chain mixing target types cannot be built:
///
/// ```compile_fail
/// use case_match::{of_type, Case, Instance};
///
/// let case: Case<'_, dyn Instance, usize> = of_type(|s: &String| s.len())
///     .also(|n: &i64| *n as usize)
///     .into();
/// ```
///
/// Convert into a `Case` with `.into()` (or `into_case`) before dispatch.
///
/// # Panics
///
/// The narrowing inside each action panics if `Case::result` is called
/// directly on a value that is not an instance of `U`. `match_value` only
/// runs actions after the predicate has confirmed the instance, so it never
/// does.
pub struct TypeCase<'a, U, S: ?Sized, T> {
    case: Case<'a, S, T>,
    target: PhantomData<fn(&U)>,
}

impl<'a, U, S, T> TypeCase<'a, U, S, T>
where
    U: Any,
    S: Instance + ?Sized,
{
    pub(crate) fn new<F>(action: F) -> Self
    where
        F: Fn(&U) -> T + Send + Sync + 'a,
    {
        TypeCase {
            case: Case::new(
                CaseKind::Type(type_name::<U>()),
                Box::new(|value: &S| narrow::<U, S>(value).is_some()),
                narrowed(action),
            ),
            target: PhantomData,
        }
    }

    /// Append another action over the narrowed value.
    #[must_use]
    pub fn also<F>(mut self, action: F) -> Self
    where
        F: Fn(&U) -> T + Send + Sync + 'a,
    {
        self.case.rest.push(narrowed(action));
        self
    }

    /// Finish the chain.
    pub fn into_case(self) -> Case<'a, S, T> {
        self.case
    }
}

impl<'a, U, S, T> From<TypeCase<'a, U, S, T>> for Case<'a, S, T>
where
    U: Any,
    S: Instance + ?Sized,
{
    fn from(case: TypeCase<'a, U, S, T>) -> Self {
        case.into_case()
    }
}

impl<U, S: ?Sized, T> fmt::Debug for TypeCase<'_, U, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.case.fmt(f)
    }
}

fn narrowed<'a, U, S, T, F>(action: F) -> Action<'a, S, T>
where
    U: Any,
    S: Instance + ?Sized,
    F: Fn(&U) -> T + Send + Sync + 'a,
{
    Box::new(move |value: &S| match narrow::<U, S>(value) {
        Some(narrowed) => action(narrowed),
        None => panic!("{value:?} is not an instance of {}", type_name::<U>()),
    })
}
