#![allow(dead_code)]
//! Raw-integer construction surface for scene-description readers.
//!
//! Readers hand over plain integers straight off the wire; the builder
//! validates ranges and continuity as motions arrive, then assembles a
//! `Scene`. The first motion of each shape defines its initial pose;
//! later motions inherit their start state from the previous end state.

use hashbrown::HashMap;

use crate::canvas::Canvas;
use crate::error::TimelineError;
use crate::interval::Tick;
use crate::scene::Scene;
use crate::shape::ShapeKind;
use crate::state::{Rgb, State, Vec2};

/// One validated motion line, buffered until `build`.
#[derive(Clone, Copy, Debug)]
struct Motion {
    start_tick: Tick,
    start_state: State,
    end_tick: Tick,
    end_state: State,
}

/// Accumulates bounds, declarations, and motions, validating as it
/// goes. Declaration order is preserved into the built scene.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    canvas: Canvas,
    shapes: Vec<(String, ShapeKind)>,
    motions: HashMap<String, Vec<Motion>>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas bounds from raw integers.
    pub fn set_bounds(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<&mut Self, TimelineError> {
        let width = non_negative(width, "canvas width")?;
        let height = non_negative(height, "canvas height")?;
        self.canvas = Canvas::new(width, height, Vec2::new(x as f32, y as f32));
        Ok(self)
    }

    /// Declare a shape from its scene-description kind name.
    pub fn declare_shape(&mut self, id: &str, kind: &str) -> Result<&mut Self, TimelineError> {
        let kind: ShapeKind = kind.parse()?;
        if self.shapes.iter().any(|(name, _)| name == id) {
            return Err(TimelineError::DuplicateId(id.to_string()));
        }
        self.shapes.push((id.to_string(), kind));
        self.motions.insert(id.to_string(), Vec::new());
        Ok(self)
    }

    /// One motion line: both endpoint states as raw integers.
    ///
    /// A motion after the first must start where the previous one ended.
    /// Its start state is inherited from the previous end state; only
    /// the first motion's start values are read (as the initial pose).
    #[allow(clippy::too_many_arguments)]
    pub fn add_motion(
        &mut self,
        id: &str,
        t1: i32,
        x1: i32,
        y1: i32,
        w1: i32,
        h1: i32,
        r1: i32,
        g1: i32,
        b1: i32,
        t2: i32,
        x2: i32,
        y2: i32,
        w2: i32,
        h2: i32,
        r2: i32,
        g2: i32,
        b2: i32,
    ) -> Result<&mut Self, TimelineError> {
        let start_tick = tick_of(t1)?;
        let end_tick = tick_of(t2)?;
        if end_tick < start_tick {
            return Err(TimelineError::InvalidRange(format!(
                "motion for '{id}' ends at tick {t2} before it starts at tick {t1}"
            )));
        }
        let supplied_start = state_of(x1, y1, w1, h1, r1, g1, b1)?;
        let end_state = state_of(x2, y2, w2, h2, r2, g2, b2)?;

        let motions = self
            .motions
            .get_mut(id)
            .ok_or_else(|| TimelineError::UnknownObject(id.to_string()))?;
        let start_state = match motions.last() {
            Some(prev) => {
                if start_tick != prev.end_tick {
                    return Err(TimelineError::DiscontinuousTime {
                        expected: prev.end_tick,
                        found: start_tick,
                    });
                }
                prev.end_state
            }
            None => supplied_start,
        };
        motions.push(Motion {
            start_tick,
            start_state,
            end_tick,
            end_state,
        });
        Ok(self)
    }

    /// Assemble the scene: declarations in order, then each shape's
    /// motions appended in sequence.
    pub fn build(self) -> Result<Scene, TimelineError> {
        let mut scene = Scene::with_canvas(self.canvas);
        for (id, kind) in &self.shapes {
            let initial = self
                .motions
                .get(id)
                .and_then(|ms| ms.first())
                .map(|m| m.start_state)
                .unwrap_or_default();
            scene.declare_with_pose(id.clone(), *kind, initial)?;
        }
        for (id, _) in &self.shapes {
            if let Some(motions) = self.motions.get(id) {
                for m in motions {
                    scene.append(id, m.start_tick, m.end_tick, m.end_state)?;
                }
            }
        }
        Ok(scene)
    }
}

fn non_negative(value: i32, what: &str) -> Result<u32, TimelineError> {
    u32::try_from(value)
        .map_err(|_| TimelineError::InvalidRange(format!("{what} cannot be negative, got {value}")))
}

fn tick_of(value: i32) -> Result<Tick, TimelineError> {
    u32::try_from(value)
        .map_err(|_| TimelineError::InvalidRange(format!("tick cannot be negative, got {value}")))
}

fn channel_of(value: i32, what: &str) -> Result<u8, TimelineError> {
    u8::try_from(value).map_err(|_| {
        TimelineError::InvalidRange(format!("{what} must be in [0, 255], got {value}"))
    })
}

fn state_of(x: i32, y: i32, w: i32, h: i32, r: i32, g: i32, b: i32) -> Result<State, TimelineError> {
    Ok(State::new(
        Vec2::new(x as f32, y as f32),
        Rgb::new(
            channel_of(r, "red")?,
            channel_of(g, "green")?,
            channel_of(b, "blue")?,
        ),
        non_negative(w, "width")?,
        non_negative(h, "height")?,
    ))
}
