//! Two-variant outcome type crossing the serialization boundary.
//!
//! Exactly one of success or failure is present, never both, never neither.
//! On the wire the variants are externally tagged as `{"ok": ...}` and
//! `{"err": ...}`, so a decoder reads the discriminant first instead of
//! trying both shapes blindly.

use serde::{Deserialize, Serialize};

/// Outcome of one invocation: a success value or a failure value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Either<L, R> {
    /// Success value. Wire tag: `"ok"`.
    #[serde(rename = "ok")]
    Left(L),
    /// Failure value. Wire tag: `"err"`.
    #[serde(rename = "err")]
    Right(R),
}

impl<L, R> Either<L, R> {
    /// True if this is the success variant.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// True if this is the failure variant.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The success value, if present.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The failure value, if present.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Map the success variant, leaving the failure variant untouched.
    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }
}
