#![allow(dead_code)]
//! Scene: the timeline store and query facade.
//!
//! Owns the object registry (declaration order preserved), one timeline
//! per object, and the canvas. Callers receive value copies only; no
//! mutable reference into the store ever escapes, so readers cannot
//! observe a half-mutated timeline.

use hashbrown::HashMap;
use log::{debug, trace};

use crate::canvas::Canvas;
use crate::error::TimelineError;
use crate::interval::{Interval, Tick};
use crate::sampling::sample;
use crate::shape::{Shape, ShapeKind};
use crate::state::State;
use crate::timeline::Timeline;

/// One visible object at a queried tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectState {
    pub id: String,
    pub kind: ShapeKind,
    pub state: State,
}

/// The timeline store. All mutations are synchronous and atomic:
/// validation precedes any change, so a failed call leaves the scene
/// untouched.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    timelines: HashMap<String, Timeline>,
    canvas: Canvas,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Declare a new object with the default initial pose.
    pub fn declare(&mut self, id: impl Into<String>, kind: ShapeKind) -> Result<(), TimelineError> {
        self.declare_with_pose(id, kind, State::default())
    }

    /// Declare a new object whose first interval starts from `initial`.
    pub fn declare_with_pose(
        &mut self,
        id: impl Into<String>,
        kind: ShapeKind,
        initial: State,
    ) -> Result<(), TimelineError> {
        let id = id.into();
        if self.timelines.contains_key(&id) {
            return Err(TimelineError::DuplicateId(id));
        }
        debug!("declare '{id}' as {kind}");
        self.shapes.push(Shape::with_initial(id.clone(), kind, initial));
        self.timelines.insert(id, Timeline::new());
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.timelines.contains_key(id)
    }

    /// Declaration-ordered read view of the registry.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: &str) -> Result<&Shape, TimelineError> {
        self.shapes
            .iter()
            .find(|s| s.name == id)
            .ok_or_else(|| TimelineError::UnknownObject(id.to_string()))
    }

    fn timeline(&self, id: &str) -> Result<&Timeline, TimelineError> {
        self.timelines
            .get(id)
            .ok_or_else(|| TimelineError::UnknownObject(id.to_string()))
    }

    fn timeline_mut(&mut self, id: &str) -> Result<&mut Timeline, TimelineError> {
        self.timelines
            .get_mut(id)
            .ok_or_else(|| TimelineError::UnknownObject(id.to_string()))
    }

    /// Append a trailing interval to `id`'s timeline.
    ///
    /// The caller supplies only the destination state: on a non-empty
    /// timeline the start state is inherited from the previous end state
    /// and `start_tick` must equal the previous end tick; on an empty
    /// one the declared initial pose is the start state.
    pub fn append(
        &mut self,
        id: &str,
        start_tick: Tick,
        end_tick: Tick,
        end_state: State,
    ) -> Result<(), TimelineError> {
        let initial = self.shape(id)?.initial;
        trace!("append [{start_tick}, {end_tick}] to '{id}'");
        self.timeline_mut(id)?
            .append(&initial, start_tick, end_tick, end_state)
    }

    /// Splice a pose into `id`'s timeline at `tick`. See
    /// `Timeline::insert_frame` for boundary and empty-timeline rules.
    pub fn insert_frame(
        &mut self,
        id: &str,
        tick: Tick,
        state: State,
    ) -> Result<(), TimelineError> {
        trace!("insert frame at {tick} into '{id}'");
        self.timeline_mut(id)?.insert_frame(tick, state)
    }

    /// Remove one interval from `id`'s timeline by value equality.
    pub fn remove(&mut self, id: &str, interval: &Interval) -> Result<(), TimelineError> {
        self.timeline_mut(id)?.remove(interval)
    }

    /// Remove every interval of `id` whose closed range covers `tick`.
    pub fn remove_at_tick(&mut self, id: &str, tick: Tick) -> Result<(), TimelineError> {
        trace!("remove intervals covering {tick} from '{id}'");
        self.timeline_mut(id)?.remove_at_tick(tick)
    }

    /// Remove the object and discard its timeline. Not idempotent: a
    /// second call fails with `UnknownObject`.
    pub fn remove_object(&mut self, id: &str) -> Result<(), TimelineError> {
        if self.timelines.remove(id).is_none() {
            return Err(TimelineError::UnknownObject(id.to_string()));
        }
        self.shapes.retain(|s| s.name != id);
        debug!("removed '{id}'");
        Ok(())
    }

    /// Every object visible at `tick`, in declaration order.
    ///
    /// Visibility is half-open: an object covered by `[start, end)` is
    /// included, so nothing is visible at a timeline's final end tick.
    /// Objects with no covering interval are omitted.
    pub fn objects_at(&self, tick: Tick) -> Vec<ObjectState> {
        let mut result = Vec::new();
        for shape in &self.shapes {
            if let Some(timeline) = self.timelines.get(&shape.name) {
                if let Some(interval) = timeline.interval_at(tick) {
                    result.push(ObjectState {
                        id: shape.name.clone(),
                        kind: shape.kind,
                        state: sample(interval, tick),
                    });
                }
            }
        }
        result
    }

    /// Ordered copy of `id`'s interval sequence.
    pub fn events_of(&self, id: &str) -> Result<Vec<Interval>, TimelineError> {
        Ok(self.timeline(id)?.as_slice().to_vec())
    }

    /// Copy of the full id -> intervals map.
    pub fn events(&self) -> HashMap<String, Vec<Interval>> {
        self.timelines
            .iter()
            .map(|(id, tl)| (id.clone(), tl.as_slice().to_vec()))
            .collect()
    }
}
