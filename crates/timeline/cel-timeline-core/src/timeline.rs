#![allow(dead_code)]
//! Ordered keyframe-interval sequences and their mutation algebra.
//!
//! Invariants upheld after every mutation:
//! 1. Intervals are ordered by start tick and pairwise non-overlapping.
//! 2. Consecutive intervals tile time: `b.start_tick == a.end_tick`.
//! 3. States are continuous at shared boundaries:
//!    `b.start_state == a.end_state`.
//! 4. Every interval satisfies `start_tick <= end_tick` (zero-length
//!    allowed).
//!
//! Mutations validate before touching the sequence; a rejected call
//! leaves the timeline unchanged.

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;
use crate::interval::{Interval, Tick};
use crate::state::State;

/// One object's ordered interval sequence.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn first(&self) -> Option<&Interval> {
        self.intervals.first()
    }

    pub fn last(&self) -> Option<&Interval> {
        self.intervals.last()
    }

    /// First tick covered by any interval.
    pub fn start(&self) -> Option<Tick> {
        self.first().map(|e| e.start_tick)
    }

    /// Last tick covered by any interval.
    pub fn end(&self) -> Option<Tick> {
        self.last().map(|e| e.end_tick)
    }

    /// The interval visible at `tick` under half-open containment.
    pub fn interval_at(&self, tick: Tick) -> Option<&Interval> {
        self.intervals.iter().find(|e| e.contains(tick))
    }

    /// Append a trailing interval ending in `end_state`.
    ///
    /// On an empty timeline `initial` becomes the start state. On a
    /// non-empty one, `start_tick` must equal the previous end tick and
    /// the start state is inherited from the previous end state; the
    /// caller supplies only the destination.
    pub fn append(
        &mut self,
        initial: &State,
        start_tick: Tick,
        end_tick: Tick,
        end_state: State,
    ) -> Result<(), TimelineError> {
        let start_state = match self.intervals.last() {
            Some(prev) => {
                if start_tick != prev.end_tick {
                    return Err(TimelineError::DiscontinuousTime {
                        expected: prev.end_tick,
                        found: start_tick,
                    });
                }
                prev.end_state
            }
            None => *initial,
        };
        let interval = Interval::new(start_tick, start_state, end_tick, end_state)?;
        self.intervals.push(interval);
        Ok(())
    }

    /// Force a pose at `tick` without changing overall timing.
    ///
    /// An empty timeline gains a single held interval at `tick`. A tick
    /// landing exactly on an existing boundary is a no-op: the pose
    /// there is already a keyframe. An interior tick splits the covering
    /// interval into two halves that share `state` at `tick`.
    pub fn insert_frame(&mut self, tick: Tick, state: State) -> Result<(), TimelineError> {
        if self.intervals.is_empty() {
            self.intervals.push(Interval::held(tick, state));
            return Ok(());
        }
        let start = self.intervals[0].start_tick;
        let end = self.intervals[self.intervals.len() - 1].end_tick;
        if tick < start || tick > end {
            return Err(TimelineError::OutOfBounds { tick, start, end });
        }
        if self
            .intervals
            .iter()
            .any(|e| e.start_tick == tick || e.end_tick == tick)
        {
            return Ok(());
        }
        // Contiguity guarantees exactly one interval holds tick strictly
        // inside itself once the boundary cases above are excluded.
        let idx = self
            .intervals
            .iter()
            .position(|e| e.interior(tick))
            .ok_or(TimelineError::IntervalNotFound)?;
        let e = self.intervals[idx];
        self.intervals[idx] = Interval {
            start_tick: e.start_tick,
            end_tick: tick,
            start_state: e.start_state,
            end_state: state,
        };
        self.intervals.insert(
            idx + 1,
            Interval {
                start_tick: tick,
                end_tick: e.end_tick,
                start_state: state,
                end_state: e.end_state,
            },
        );
        Ok(())
    }

    /// Remove `interval` by value equality.
    ///
    /// A first or last interval is dropped outright; the caller owns any
    /// resulting discontinuity at the ends. An internal interval is
    /// merged away: its predecessor is widened to run from the
    /// predecessor's start to the successor's start, carrying the
    /// predecessor's start state to the successor's start state.
    pub fn remove(&mut self, interval: &Interval) -> Result<(), TimelineError> {
        if self.intervals.is_empty() {
            return Err(TimelineError::EmptyTimeline);
        }
        let idx = self
            .intervals
            .iter()
            .position(|e| e == interval)
            .ok_or(TimelineError::IntervalNotFound)?;
        if idx == 0 || idx == self.intervals.len() - 1 {
            self.intervals.remove(idx);
            return Ok(());
        }
        let prev = self.intervals[idx - 1];
        let next = self.intervals[idx + 1];
        self.intervals[idx - 1] = Interval {
            start_tick: prev.start_tick,
            end_tick: next.start_tick,
            start_state: prev.start_state,
            end_state: next.start_state,
        };
        self.intervals.remove(idx);
        Ok(())
    }

    /// Remove every interval whose closed range covers `tick`.
    ///
    /// Usually one interval matches; a boundary tick belongs to two and
    /// both are removed. Matches are collected before any removal so the
    /// multi-remove operates on a consistent snapshot.
    pub fn remove_at_tick(&mut self, tick: Tick) -> Result<(), TimelineError> {
        if self.intervals.is_empty() {
            return Err(TimelineError::EmptyTimeline);
        }
        let start = self.intervals[0].start_tick;
        let end = self.intervals[self.intervals.len() - 1].end_tick;
        if tick < start || tick > end {
            return Err(TimelineError::OutOfBounds { tick, start, end });
        }
        let matched: Vec<Interval> = self
            .intervals
            .iter()
            .copied()
            .filter(|e| e.covers(tick))
            .collect();
        for interval in &matched {
            self.remove(interval)?;
        }
        Ok(())
    }

    /// Verify invariants 1-4. Exposed for tests; mutations uphold these
    /// by construction.
    pub fn is_contiguous(&self) -> bool {
        self.intervals
            .windows(2)
            .all(|w| w[1].start_tick == w[0].end_tick && w[1].start_state == w[0].end_state)
            && self.intervals.iter().all(|e| e.start_tick <= e.end_tick)
    }
}
