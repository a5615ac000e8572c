#![allow(dead_code)]
//! Keyframe intervals: timed linear transitions between two states.

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;
use crate::state::State;

/// Discrete animation time.
pub type Tick = u32;

/// A linear transition of every state channel over
/// `[start_tick, end_tick]`. Zero-length intervals are allowed and
/// represent a held pose.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Interval {
    pub start_tick: Tick,
    pub end_tick: Tick,
    pub start_state: State,
    pub end_state: State,
}

impl Interval {
    /// Build an interval, rejecting a reversed tick range.
    pub fn new(
        start_tick: Tick,
        start_state: State,
        end_tick: Tick,
        end_state: State,
    ) -> Result<Self, TimelineError> {
        if end_tick < start_tick {
            return Err(TimelineError::InvalidRange(format!(
                "interval end tick {end_tick} precedes start tick {start_tick}"
            )));
        }
        Ok(Self {
            start_tick,
            end_tick,
            start_state,
            end_state,
        })
    }

    /// Held pose: a zero-length interval with identical endpoint states.
    pub fn held(tick: Tick, state: State) -> Self {
        Self {
            start_tick: tick,
            end_tick: tick,
            start_state: state,
            end_state: state,
        }
    }

    /// Half-open containment used by visibility queries.
    #[inline]
    pub fn contains(&self, tick: Tick) -> bool {
        tick >= self.start_tick && tick < self.end_tick
    }

    /// Closed containment used by tick-addressed removal.
    #[inline]
    pub fn covers(&self, tick: Tick) -> bool {
        tick >= self.start_tick && tick <= self.end_tick
    }

    /// Strict interior containment: the ticks a splice may target.
    #[inline]
    pub fn interior(&self, tick: Tick) -> bool {
        tick > self.start_tick && tick < self.end_tick
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.start_tick == self.end_tick
    }
}
