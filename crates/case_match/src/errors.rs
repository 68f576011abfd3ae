//! Error types for case dispatch.
//!
//! Dispatch has exactly one failure of its own: running out of cases.
//! Panics raised inside user predicates or actions are not caught here and
//! unwind through `match_value` unchanged.

use std::fmt;

use thiserror::Error;

/// Result of a `match_value` call.
pub type MatchResult<T> = Result<T, MatchError>;

/// No case accepted the value.
///
/// Carries the rendered form of the unmatched value, so the error stays
/// `'static` and can travel through `Box<dyn Error>` regardless of the
/// lifetime of the value that produced it.
///
/// The value is rendered with `Debug`, not `Display`: numbers read as
/// themselves but strings keep their quotes and escapes, e.g.
/// `"zebra" doesn't match any of the provided clauses`. `Debug` is the one
/// rendering every matchable value has, including `dyn Instance`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{value} doesn't match any of the provided clauses")]
pub struct MatchError {
    value: String,
}

impl MatchError {
    /// The rendered form of the value that failed to match.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// No case matched `value`.
#[cold]
pub fn no_match<S: fmt::Debug + ?Sized>(value: &S) -> MatchError {
    MatchError {
        value: format!("{value:?}"),
    }
}
