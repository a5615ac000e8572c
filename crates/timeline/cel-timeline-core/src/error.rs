#![allow(dead_code)]
//! Error taxonomy for scene mutations and queries.

use thiserror::Error;

use crate::interval::Tick;

/// Every way a mutation or query can be rejected.
///
/// All variants are local, synchronous, and non-retryable: the caller
/// corrects its arguments and calls again. The store never clamps or
/// guesses a corrected value, and is left unchanged whenever one of
/// these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("object '{0}' is already declared")]
    DuplicateId(String),
    #[error("unknown object '{0}'")]
    UnknownObject(String),
    #[error("unknown shape kind '{0}'")]
    InvalidKind(String),
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("interval must start at tick {expected}, got {found}")]
    DiscontinuousTime { expected: Tick, found: Tick },
    #[error("tick {tick} is outside the timeline span [{start}, {end}]")]
    OutOfBounds { tick: Tick, start: Tick, end: Tick },
    #[error("timeline has no intervals")]
    EmptyTimeline,
    #[error("no matching interval in timeline")]
    IntervalNotFound,
}
