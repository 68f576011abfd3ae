//! Case factories and first-match-wins dispatch.
//!
//! # Equality
//!
//! `value` and `values` compare with `PartialEq`, i.e. by value. Two
//! distinct `String`s with the same contents are equal keys; pointer identity
//! plays no part.
//!
//! # Evaluation order
//!
//! `match_value` walks the cases in the order the iterator yields them and
//! stops at the first case whose predicate holds. Predicates of later cases
//! are never called and their actions never run.
//!
//! ```
//! use case_match::{match_value, otherwise, value};
//!
//! let cases = [
//!     value(1, |_| "one"),
//!     value(2, |_| "two"),
//!     otherwise(|_| "other"),
//! ];
//! assert_eq!(match_value(&2, &cases), Ok("two"));
//! assert_eq!(match_value(&5, &cases), Ok("other"));
//! ```

use std::any::Any;
use std::fmt;

use crate::case::{Case, CaseKind, TypeCase};
use crate::errors::{no_match, MatchResult};
use crate::instance::Instance;

/// A case that matches values equal to `key`.
pub fn value<'a, S, T, F>(key: S, action: F) -> Case<'a, S, T>
where
    S: PartialEq + Send + Sync + 'a,
    F: Fn(&S) -> T + Send + Sync + 'a,
{
    Case::new(
        CaseKind::Value,
        Box::new(move |value: &S| *value == key),
        Box::new(action),
    )
}

/// A case that matches values equal to any of `keys`.
///
/// With no keys the case never matches.
pub fn values<'a, S, T, I, F>(keys: I, action: F) -> Case<'a, S, T>
where
    S: PartialEq + Send + Sync + 'a,
    I: IntoIterator<Item = S>,
    F: Fn(&S) -> T + Send + Sync + 'a,
{
    let keys: Vec<S> = keys.into_iter().collect();
    Case::new(
        CaseKind::Values,
        Box::new(move |value: &S| keys.iter().any(|key| value == key)),
        Box::new(action),
    )
}

/// A case that matches values that are instances of `U`.
///
/// The action receives the value narrowed to `&U`. Usually `U` is inferred
/// from the closure's parameter annotation. More actions over `&U` chain
/// with `TypeCase::also`; `.into()` yields the `Case`:
///
/// ```
/// use case_match::{match_value, of_type, otherwise, Case, Instance};
///
/// let cases: Vec<Case<'_, Box<dyn Instance>, i64>> = vec![
///     of_type(|n: &i64| n * 2).into(),
///     of_type(|s: &String| s.len() as i64)
///         .also(|s| -(s.len() as i64))
///         .into(),
///     otherwise(|_| 0),
/// ];
///
/// let number: Box<dyn Instance> = Box::new(21_i64);
/// let text: Box<dyn Instance> = Box::new(String::from("abc"));
/// let flag: Box<dyn Instance> = Box::new(true);
/// assert_eq!(match_value(&number, &cases), Ok(42));
/// assert_eq!(match_value(&text, &cases), Ok(-3));
/// assert_eq!(match_value(&flag, &cases), Ok(0));
/// ```
pub fn of_type<'a, U, S, T, F>(action: F) -> TypeCase<'a, U, S, T>
where
    U: Any,
    S: Instance + ?Sized,
    F: Fn(&U) -> T + Send + Sync + 'a,
{
    TypeCase::new(action)
}

/// A case that matches every value.
///
/// Place it last: cases after it are unreachable.
pub fn otherwise<'a, S, T, F>(action: F) -> Case<'a, S, T>
where
    S: ?Sized,
    F: Fn(&S) -> T + Send + Sync + 'a,
{
    Case::new(CaseKind::Else, Box::new(|_: &S| true), Box::new(action))
}

/// Run the first case in `cases` that matches `value`.
///
/// Returns the result of that case's last action, or a `MatchError` naming
/// `value` when no case matches.
#[tracing::instrument(level = "trace", skip_all)]
pub fn match_value<'c, 'a: 'c, S, T>(
    value: &S,
    cases: impl IntoIterator<Item = &'c Case<'a, S, T>>,
) -> MatchResult<T>
where
    S: fmt::Debug + ?Sized + 'c,
    T: 'c,
{
    for (index, case) in cases.into_iter().enumerate() {
        if case.matches(value) {
            tracing::trace!(index, kind = ?case.kind(), "case matched");
            return Ok(case.result(value));
        }
    }

    tracing::debug!(value = ?value, "no case matched");
    Err(no_match(value))
}
