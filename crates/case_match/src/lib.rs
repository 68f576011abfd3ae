//! Case Match - first-match-wins dispatch over an ordered list of cases.
//!
//! This crate provides:
//! - `Case`, a predicate paired with a chain of actions
//! - Factories for the common predicate shapes (`value`, `values`,
//!   `of_type`, `otherwise`)
//! - `match_value`, which runs the first case that accepts a value
//! - `Instance`, the runtime type capability behind `of_type`
//!
//! # Architecture
//!
//! Dispatch is a linear scan:
//! - Cases are tested in the order supplied; the first whose predicate holds
//!   runs its actions and ends the scan
//! - Every action of a case receives the original value; the last action's
//!   result is the result of the match
//! - Running out of cases is a `MatchError` carrying the unmatched value
//!
//! ```
//! use case_match::{match_value, otherwise, value, values};
//!
//! let cases = [
//!     value(0, |_| "zero"),
//!     values([1, 2, 3], |_| "small"),
//!     otherwise(|_| "large"),
//! ];
//! assert_eq!(match_value(&2, &cases), Ok("small"));
//! ```

mod case;
mod errors;
mod instance;
mod matcher;

#[cfg(test)]
mod test_helpers;

pub use case::{Case, CaseKind, TypeCase};
pub use errors::{no_match, MatchError, MatchResult};
pub use instance::{narrow, Instance};
pub use matcher::{match_value, of_type, otherwise, value, values};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=case_match=trace` to see which case matched.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
